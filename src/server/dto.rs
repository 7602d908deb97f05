//! Request and response bodies.

use super::error::ApiError;
use crate::core::{Direction, Disc, Grid, PuzzleState};
use crate::engine::Command;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    PickUp,
    Drop,
    Move,
    /// Any other action name.
    #[serde(other)]
    Unknown,
}

/// Body of `POST /command`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommandRequest {
    pub action: Action,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub direction: Option<Direction>,
}

// `""` counts as no direction at all.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<Direction>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(name) if !name.is_empty() => {
            Direction::deserialize(name.into_deserializer()).map(Some)
        }
        _ => Ok(None),
    }
}

impl CommandRequest {
    /// Turn the request into an engine command.
    ///
    /// `direction` is ignored for actions other than `move`.
    pub fn into_command(self) -> Result<Command, ApiError> {
        match self.action {
            Action::Move => self
                .direction
                .map(Command::Move)
                .ok_or_else(|| ApiError::bad_request("missing direction for move action")),
            Action::PickUp => Ok(Command::PickUp),
            Action::Drop => Ok(Command::Drop),
            Action::Unknown => Err(ApiError::bad_request("unknown action")),
        }
    }
}

/// State payload returned by `GET /state` and `POST /command`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StateResponse {
    pub position_x: usize,
    pub position_y: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holding: Option<Disc>,
    pub grid: Grid,
    pub won: bool,
}

impl From<&PuzzleState> for StateResponse {
    fn from(state: &PuzzleState) -> Self {
        Self {
            position_x: state.robot.position.x,
            position_y: state.robot.position.y,
            holding: state.robot.holding,
            grid: state.grid.clone(),
            won: state.won(),
        }
    }
}
