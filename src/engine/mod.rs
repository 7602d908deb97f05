//! The puzzle engine.
//!
//! This module wraps the pure core in the one place where state changes:
//!
//! - **Transitions**: [`transition`] computes the effect of a [`Command`]
//!   without mutating anything
//! - **Puzzle**: owns the state and history and commits successful steps
//! - **Shared handle**: [`SharedPuzzle`] serializes access from many callers
//!   behind a single lock

mod puzzle;
mod shared;

pub use puzzle::{transition, Command, Puzzle, Step};
pub use shared::SharedPuzzle;
