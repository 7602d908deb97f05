//! Stackbot: a single-robot disc stacking puzzle
//!
//! A robot moves over a fixed 3x3 grid whose cells hold stacks of colored
//! discs. It can carry one disc at a time, and may only drop a disc where the
//! stacking rule allows: nothing goes on red, anything goes on green, and only
//! red goes on blue. The puzzle is solved when every occupied cell holds a
//! green-blue-red tower.
//!
//! # Core Concepts
//!
//! - **Core**: pure value types for discs, the grid, the robot and the history
//! - **Engine**: the reducer that applies commands, plus a lock-guarded handle
//!   for sharing one puzzle between many callers
//! - **Layout**: validated starting positions loaded from JSON
//! - **Server**: a thin axum front end with JSON state and CSV history export
//!
//! # Example
//!
//! ```rust
//! use stackbot::core::{Direction, Disc, Position};
//! use stackbot::engine::Puzzle;
//!
//! let mut puzzle = Puzzle::default();
//!
//! puzzle.pick_up().unwrap();
//! puzzle.move_robot(Direction::Down).unwrap();
//! let state = puzzle.drop_disc().unwrap();
//!
//! assert_eq!(state.robot.position, Position::new(0, 1));
//! assert_eq!(state.grid.stack(Position::new(0, 1)), &[Disc::Green, Disc::Red]);
//! assert_eq!(
//!     puzzle.history().descriptions(),
//!     ["Picked up a red circle", "Moved down", "Dropped a red circle"]
//! );
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod layout;
pub mod logging;
pub mod server;

// Re-export commonly used types
pub use core::{Direction, Disc, HistoryRecord, PuzzleError, PuzzleState};
pub use engine::{Command, Puzzle, SharedPuzzle};
