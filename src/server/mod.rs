//! HTTP front end for the puzzle.
//!
//! | Route            | Effect                                               |
//! |------------------|------------------------------------------------------|
//! | `GET /state`     | Current state as [`StateResponse`]                   |
//! | `POST /command`  | Apply a [`CommandRequest`], return the new state     |
//! | `GET /export`    | Move history as a CSV attachment                     |
//! | `GET /health`    | Liveness check                                       |
//!
//! Every rejected request answers `400` with `{"error": "<message>"}`.

mod dto;
mod error;
mod export;

pub use dto::{Action, CommandRequest, StateResponse};
pub use error::{ApiError, ServerError};
pub use export::{history_csv, CSV_HEADER};

use crate::config::Config;
use crate::engine::{Puzzle, SharedPuzzle};
use crate::layout::Layout;
use crate::logging::{FileSink, LogEvent, LogLevel, Logger, StderrSink};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, HeaderValue, Method};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};

const TARGET: &str = "stackbot::server";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub puzzle: SharedPuzzle,
    pub logger: Logger,
}

/// Build the router. An empty `origins` list allows any CORS origin.
pub fn build_router(state: AppState, origins: &[HeaderValue]) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/state", get(get_state))
        .route("/command", post(process_command))
        .route("/export", get(export_history))
        .with_state(state)
        .layer(cors_layer(origins))
}

fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o.as_bytes() == b"*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins.iter().cloned())
    };

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(allow_origin)
}

async fn health() -> &'static str {
    "ok"
}

async fn get_state(State(app): State<AppState>) -> Json<StateResponse> {
    Json(StateResponse::from(&app.puzzle.state()))
}

async fn process_command(
    State(app): State<AppState>,
    payload: Result<Json<CommandRequest>, JsonRejection>,
) -> Result<Json<StateResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        app.logger.emit(
            LogEvent::new(LogLevel::Warn, TARGET, "malformed command")
                .field("reason", rejection.body_text()),
        );
        ApiError::bad_request("invalid request")
    })?;

    let command = request.into_command().inspect_err(|err| {
        app.logger.emit(
            LogEvent::new(LogLevel::Warn, TARGET, "malformed command")
                .field("reason", err.message()),
        );
    })?;

    match app.puzzle.apply(command) {
        Ok(state) => {
            let response = StateResponse::from(&state);
            app.logger.emit(
                LogEvent::new(LogLevel::Info, TARGET, "command applied")
                    .field("command", command.to_string())
                    .field("x", response.position_x)
                    .field("y", response.position_y)
                    .field("won", response.won),
            );
            Ok(Json(response))
        }
        Err(err) => {
            app.logger.emit(
                LogEvent::new(LogLevel::Warn, TARGET, "command rejected")
                    .field("command", command.to_string())
                    .field("kind", err.kind())
                    .field("error", err.to_string()),
            );
            Err(err.into())
        }
    }
}

async fn export_history(State(app): State<AppState>) -> impl IntoResponse {
    let (records, span) = app
        .puzzle
        .inspect(|p| (p.history().records().to_vec(), p.history().duration()));

    app.logger.emit(
        LogEvent::new(LogLevel::Debug, TARGET, "history exported")
            .field("records", records.len())
            .field("span_secs", span.map(|d| d.as_secs())),
    );

    (
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=history.csv",
            ),
        ],
        history_csv(&records),
    )
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Build everything described by `config` and serve until Ctrl-C.
pub async fn run(config: Config) -> Result<(), ServerError> {
    let logger = match &config.log_file {
        Some(path) => Logger::new(FileSink::new(path, config.log_max_bytes)?, config.log_level),
        None => Logger::new(StderrSink, config.log_level),
    };

    let layout = match &config.layout {
        Some(path) => Layout::from_file(path)?,
        None => Layout::reference(),
    };
    let addr = config.bind_addr()?;
    let origins = config.cors_origins()?;

    let state = AppState {
        puzzle: SharedPuzzle::new(Puzzle::new(layout.into_state())),
        logger: logger.clone(),
    };
    let app = build_router(state, &origins);

    let listener = TcpListener::bind(addr).await?;
    logger.emit(
        LogEvent::new(LogLevel::Info, TARGET, "listening")
            .field("addr", listener.local_addr()?.to_string())
            .field(
                "layout",
                config
                    .layout
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "reference".to_string()),
            ),
    );

    serve(listener, app, shutdown_signal()).await?;
    logger.info(TARGET, "shut down");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler; run until the process is killed.
        std::future::pending::<()>().await;
    }
}
