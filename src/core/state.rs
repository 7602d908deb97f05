//! Robot and puzzle state snapshots.
//!
//! `PuzzleState` is a plain value: cloning it gives a consistent snapshot of
//! the robot and every stack at one point in time.

use super::disc::Disc;
use super::error::PuzzleError;
use super::grid::{Grid, Position};
use serde::{Deserialize, Serialize};

/// The stack every occupied cell must hold for the puzzle to be solved,
/// bottom first.
pub const TOWER: [Disc; 3] = [Disc::Green, Disc::Blue, Disc::Red];

/// The robot's position and the disc it carries, if any.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Robot {
    pub position: Position,
    pub holding: Option<Disc>,
}

impl Robot {
    pub fn at(position: Position) -> Self {
        Self {
            position,
            holding: None,
        }
    }
}

/// Robot plus grid.
///
/// # Example
///
/// ```rust
/// use stackbot::core::{Grid, Position, PuzzleState};
///
/// let state = PuzzleState::new(Grid::reference(), Position::new(0, 0)).unwrap();
/// assert_eq!(state.robot.holding, None);
/// assert!(!state.won());
///
/// assert!(PuzzleState::new(Grid::reference(), Position::new(3, 0)).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PuzzleState {
    pub robot: Robot,
    pub grid: Grid,
}

impl PuzzleState {
    /// A state with the robot empty-handed at `start`.
    ///
    /// Fails with [`PuzzleError::OffGrid`] if `start` is not on the grid.
    pub fn new(grid: Grid, start: Position) -> Result<Self, PuzzleError> {
        if !start.in_bounds() {
            return Err(PuzzleError::OffGrid { position: start });
        }
        Ok(Self {
            robot: Robot::at(start),
            grid,
        })
    }

    /// The stack under the robot.
    pub fn current_stack(&self) -> &[Disc] {
        self.grid.stack(self.robot.position)
    }

    /// Whether the puzzle is solved.
    ///
    /// Solved means the robot's hands are empty, the grid holds at least one
    /// disc, and every occupied cell is exactly a [`TOWER`]. Computed fresh on
    /// every call.
    pub fn won(&self) -> bool {
        self.robot.holding.is_none()
            && self.grid.disc_count() > 0
            && self
                .grid
                .iter()
                .all(|(_, stack)| stack.is_empty() || stack == TOWER)
    }
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self {
            robot: Robot::default(),
            grid: Grid::reference(),
        }
    }
}
