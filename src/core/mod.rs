//! Core puzzle types and rules.
//!
//! This module contains the pure data model of the puzzle:
//! - Disc colors and the stacking rule
//! - Grid geometry and per-cell stacks
//! - Robot and puzzle state snapshots, including the win predicate
//! - Append-only move history
//!
//! Nothing here does I/O or locking; the [`engine`](crate::engine) drives
//! these types.

mod disc;
mod error;
mod grid;
mod history;
mod state;

pub use disc::{can_drop, Disc};
pub use error::PuzzleError;
pub use grid::{Cells, Direction, Grid, Position, GRID_SIZE};
pub use history::{HistoryRecord, MoveHistory};
pub use state::{PuzzleState, Robot, TOWER};
