//! Layout violations and load errors.

use crate::core::{Disc, Position, GRID_SIZE};
use std::path::PathBuf;
use thiserror::Error;

/// A single problem found in a layout description
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LayoutViolation {
    #[error("expected {} columns, found {found}", GRID_SIZE)]
    ColumnCount { found: usize },

    #[error("column {x}: expected {} cells, found {found}", GRID_SIZE)]
    RowCount { x: usize, found: usize },

    #[error("stack at {position}: {above} cannot sit on {below}")]
    IllegalStack {
        position: Position,
        below: Disc,
        above: Disc,
    },

    #[error("start position {start} is outside the grid")]
    StartOutOfBounds { start: Position },
}

/// Errors that can occur when loading a layout
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("failed to read layout {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse layout: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid layout: {}", join(.0))]
    Invalid(Vec<LayoutViolation>),
}

fn join(violations: &[LayoutViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
