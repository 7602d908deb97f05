//! End-to-end tests of the HTTP routes, driven through the router without a
//! socket.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use stackbot::engine::SharedPuzzle;
use stackbot::logging::{LogLevel, Logger, MemorySink};
use stackbot::server::{build_router, AppState};
use tower::ServiceExt;

fn app() -> (Router, SharedPuzzle, MemorySink) {
    let puzzle = SharedPuzzle::default();
    let sink = MemorySink::new();
    let state = AppState {
        puzzle: puzzle.clone(),
        logger: Logger::new(sink.clone(), LogLevel::Trace),
    };
    (build_router(state, &[]), puzzle, sink)
}

fn command(body: &str) -> Request<Body> {
    Request::post("/command")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_answers_ok() {
    let (app, _, _) = app();
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn initial_state_is_the_reference_layout() {
    let (app, _, _) = app();
    let (status, body) = send_json(&app, get("/state")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "position_x": 0,
            "position_y": 0,
            "grid": [
                [["red"], ["green"], ["green"]],
                [["blue"], ["red"], ["blue"]],
                [["green"], ["blue"], ["red"]]
            ],
            "won": false
        })
    );
}

#[tokio::test]
async fn pick_up_returns_the_new_state() {
    let (app, puzzle, sink) = app();
    let (status, body) = send_json(&app, command(r#"{"action":"pick_up"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["holding"], "red");
    assert_eq!(body["grid"][0][0], json!([]));
    assert_eq!(puzzle.history().len(), 1);

    let events = sink.events();
    let applied = events
        .iter()
        .find(|e| e["message"] == "command applied")
        .unwrap();
    assert_eq!(applied["level"], "info");
    assert_eq!(applied["fields"]["command"], "pick_up");
    assert_eq!(applied["fields"]["won"], false);
}

#[tokio::test]
async fn move_command_moves_the_robot() {
    let (app, _, _) = app();
    let (status, body) =
        send_json(&app, command(r#"{"action":"move","direction":"down"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["position_x"], 0);
    assert_eq!(body["position_y"], 1);
    assert!(body.get("holding").is_none());
}

#[tokio::test]
async fn malformed_body_is_an_invalid_request() {
    let (app, puzzle, sink) = app();
    for body in ["not json", r#"{"action":7}"#, r#"{"action":"move","direction":"north"}"#] {
        let (status, response) = send_json(&app, command(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(response, json!({ "error": "invalid request" }));
    }

    assert!(puzzle.history().is_empty());
    assert!(sink
        .events()
        .iter()
        .all(|e| e["message"] == "malformed command" && e["level"] == "warn"));
}

#[tokio::test]
async fn move_without_direction_is_rejected() {
    let (app, puzzle, _) = app();
    let (status, body) = send_json(&app, command(r#"{"action":"move"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "missing direction for move action" }));
    assert!(puzzle.history().is_empty());
}

#[tokio::test]
async fn empty_direction_is_treated_as_missing() {
    let (app, _, _) = app();
    let (status, body) = send_json(&app, command(r#"{"action":"move","direction":""}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "missing direction for move action" }));
}

#[tokio::test]
async fn unknown_action_is_named_in_the_error() {
    let (app, puzzle, sink) = app();
    let (status, body) = send_json(&app, command(r#"{"action":"jump"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "unknown action" }));
    assert!(puzzle.history().is_empty());
    assert_eq!(sink.events()[0]["fields"]["reason"], "unknown action");
}

#[tokio::test]
async fn engine_errors_carry_their_message() {
    let (app, puzzle, sink) = app();

    let (status, body) = send_json(&app, command(r#"{"action":"move","direction":"up"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "cannot move further in that direction");

    let (_, body) = send_json(&app, command(r#"{"action":"drop"}"#)).await;
    assert_eq!(body["error"], "not holding any circle to drop");

    send_json(&app, command(r#"{"action":"pick_up"}"#)).await;
    let (_, body) = send_json(&app, command(r#"{"action":"pick_up"}"#)).await;
    assert_eq!(body["error"], "already holding a circle");

    send_json(&app, command(r#"{"action":"move","direction":"right"}"#)).await;
    send_json(&app, command(r#"{"action":"move","direction":"down"}"#)).await;
    let (_, body) = send_json(&app, command(r#"{"action":"drop"}"#)).await;
    assert_eq!(body["error"], "cannot drop circle here due to stacking rules");

    assert_eq!(puzzle.history().len(), 3);
    let kinds: Vec<_> = sink
        .events()
        .into_iter()
        .filter(|e| e["message"] == "command rejected")
        .map(|e| e["fields"]["kind"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        kinds,
        ["out_of_bounds", "nothing_held", "already_holding", "stacking_violation"]
    );
}

#[tokio::test]
async fn empty_stack_pick_is_rejected() {
    let (app, _, _) = app();
    send_json(&app, command(r#"{"action":"pick_up"}"#)).await;
    send_json(&app, command(r#"{"action":"move","direction":"down"}"#)).await;
    send_json(&app, command(r#"{"action":"drop"}"#)).await;
    send_json(&app, command(r#"{"action":"move","direction":"up"}"#)).await;

    let (status, body) = send_json(&app, command(r#"{"action":"pick_up"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "no circles to pick up");
}

#[tokio::test]
async fn export_lists_history_as_csv() {
    let (app, _, _) = app();
    send_json(&app, command(r#"{"action":"pick_up"}"#)).await;
    send_json(&app, command(r#"{"action":"move","direction":"down"}"#)).await;

    let response = app.clone().oneshot(get("/export")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=history.csv"
    );

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Timestamp,Moves");
    assert!(lines[1].ends_with(",Picked up a red circle"));
    assert!(lines[2].ends_with(",Moved down"));
    assert!(lines[1].contains('T') && lines[1].contains('Z'));
}

#[tokio::test]
async fn export_of_empty_history_is_just_the_header() {
    let (app, _, _) = app();
    let (status, body) = send(&app, get("/export")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap().trim_end(), "Timestamp,Moves");
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let (app, _, _) = app();
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/command")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
