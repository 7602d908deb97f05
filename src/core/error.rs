//! Errors returned by puzzle commands.

use super::disc::Disc;
use super::grid::{Direction, Position};
use thiserror::Error;

/// Why a command was rejected.
///
/// A rejected command never changes the puzzle: the robot, the grid and the
/// history are exactly as they were before the call.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("cannot move further in that direction")]
    OutOfBounds {
        direction: Direction,
        from: Position,
    },

    #[error("already holding a circle")]
    AlreadyHolding { held: Disc },

    #[error("no circles to pick up")]
    EmptyStack { position: Position },

    #[error("not holding any circle to drop")]
    NothingHeld,

    #[error("cannot drop circle here due to stacking rules")]
    StackingViolation { held: Disc, top: Disc },

    #[error("robot position {position} is outside the grid")]
    OffGrid { position: Position },
}

impl PuzzleError {
    /// Short machine-readable name of the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "out_of_bounds",
            Self::AlreadyHolding { .. } => "already_holding",
            Self::EmptyStack { .. } => "empty_stack",
            Self::NothingHeld => "nothing_held",
            Self::StackingViolation { .. } => "stacking_violation",
            Self::OffGrid { .. } => "off_grid",
        }
    }
}
