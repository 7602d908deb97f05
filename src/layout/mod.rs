//! Initial puzzle layouts.
//!
//! A layout is the grid and robot start position the puzzle begins from. The
//! reference layout is built in; others are loaded from JSON:
//!
//! ```json
//! {
//!   "grid": [
//!     [["red"], ["green"], ["green"]],
//!     [["blue"], ["red"], ["blue"]],
//!     [["green"], ["blue"], ["red"]]
//!   ],
//!   "start": { "x": 0, "y": 0 }
//! }
//! ```
//!
//! `grid` is indexed `[x][y]` with each stack listed bottom first. `start`
//! defaults to the origin.
//!
//! # Validation
//!
//! Loading does not stop at the first problem. Every violation in the file is
//! collected and reported together, so a hand-edited layout can be fixed in
//! one pass.
//!
//! ```rust
//! use stackbot::layout::{Layout, LayoutError};
//!
//! let json = r#"{ "grid": [[["red", "green"]]], "start": { "x": 9, "y": 0 } }"#;
//! match Layout::from_json(json) {
//!     Err(LayoutError::Invalid(violations)) => assert!(violations.len() > 1),
//!     other => panic!("expected violations, got {other:?}"),
//! }
//! ```

mod rules;
mod violations;

pub use rules::validate;
pub use violations::{LayoutError, LayoutViolation};

use crate::core::{Cells, Disc, Grid, Position, PuzzleState, Robot, GRID_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use stillwater::validation::Validation;

/// A layout as written in a file, before validation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawLayout {
    pub grid: Vec<Vec<Vec<Disc>>>,
    #[serde(default)]
    pub start: Position,
}

/// A validated starting layout.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Layout {
    grid: Grid,
    start: Position,
}

impl Layout {
    /// The built-in reference puzzle, starting at the origin.
    pub fn reference() -> Self {
        Self {
            grid: Grid::reference(),
            start: Position::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let raw: RawLayout = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Position {
        self.start
    }

    /// The puzzle state this layout starts from.
    pub fn into_state(self) -> PuzzleState {
        PuzzleState {
            robot: Robot::at(self.start),
            grid: self.grid,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::reference()
    }
}

impl TryFrom<RawLayout> for Layout {
    type Error = LayoutError;

    fn try_from(raw: RawLayout) -> Result<Self, Self::Error> {
        if let Validation::Failure(errors) = validate(&raw) {
            return Err(LayoutError::Invalid(errors.iter().cloned().collect()));
        }

        let mut cells: Cells = Default::default();
        for (x, column) in raw.grid.into_iter().enumerate().take(GRID_SIZE) {
            for (y, stack) in column.into_iter().enumerate().take(GRID_SIZE) {
                cells[x][y] = stack;
            }
        }

        Ok(Self {
            grid: Grid::new(cells),
            start: raw.start,
        })
    }
}
