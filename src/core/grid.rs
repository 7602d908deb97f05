//! Grid geometry and per-cell disc stacks.
//!
//! The grid is a fixed `GRID_SIZE` x `GRID_SIZE` matrix indexed as
//! `cells[x][y]`, with the origin in the top-left corner and y growing
//! downward.

use super::disc::Disc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of the grid.
pub const GRID_SIZE: usize = 3;

/// Column-major cell storage: `cells[x][y]` is the stack at `(x, y)`.
pub type Cells = [[Vec<Disc>; GRID_SIZE]; GRID_SIZE];

/// A cell coordinate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether this position lies inside the grid.
    pub fn in_bounds(&self) -> bool {
        self.x < GRID_SIZE && self.y < GRID_SIZE
    }

    /// The neighbouring position one step in `direction`, or `None` if that
    /// step would leave the grid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stackbot::core::{Direction, Position};
    ///
    /// let origin = Position::new(0, 0);
    /// assert_eq!(origin.step(Direction::Right), Some(Position::new(1, 0)));
    /// assert_eq!(origin.step(Direction::Up), None);
    /// ```
    pub fn step(&self, direction: Direction) -> Option<Position> {
        let (x, y) = match direction {
            Direction::Up => (Some(self.x), self.y.checked_sub(1)),
            Direction::Down => (Some(self.x), self.y.checked_add(1)),
            Direction::Left => (self.x.checked_sub(1), Some(self.y)),
            Direction::Right => (self.x.checked_add(1), Some(self.y)),
        };
        let next = Position::new(x?, y?);
        next.in_bounds().then_some(next)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four movement directions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Lowercase direction name, as used in history descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The disc stacks of every cell.
///
/// Serializes transparently as the nested `[x][y][disc]` array.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: Cells,
}

impl Grid {
    pub fn new(cells: Cells) -> Self {
        Self { cells }
    }

    /// The starting layout of the reference puzzle.
    ///
    /// ```text
    /// x=0: [R] [G] [G]
    /// x=1: [B] [R] [B]
    /// x=2: [G] [B] [R]
    /// ```
    pub fn reference() -> Self {
        use super::disc::Disc::{Blue as B, Green as G, Red as R};
        Self::new([
            [vec![R], vec![G], vec![G]],
            [vec![B], vec![R], vec![B]],
            [vec![G], vec![B], vec![R]],
        ])
    }

    /// The stack at `position`, bottom first. Empty for positions off the
    /// grid.
    pub fn stack(&self, position: Position) -> &[Disc] {
        self.cells
            .get(position.x)
            .and_then(|column| column.get(position.y))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// `position` must be in bounds.
    pub(crate) fn stack_mut(&mut self, position: Position) -> &mut Vec<Disc> {
        &mut self.cells[position.x][position.y]
    }

    /// The top disc at `position`, if any.
    pub fn top(&self, position: Position) -> Option<Disc> {
        self.stack(position).last().copied()
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Iterate over every `(position, stack)` pair, column by column.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &[Disc])> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(y, stack)| (Position::new(x, y), stack.as_slice()))
        })
    }

    /// Total number of discs on the grid.
    pub fn disc_count(&self) -> usize {
        self.iter().map(|(_, stack)| stack.len()).sum()
    }
}
