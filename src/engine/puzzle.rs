//! The puzzle reducer.

use crate::core::{Direction, HistoryRecord, MoveHistory, PuzzleError, PuzzleState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A command the robot can execute.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "action", content = "direction", rename_all = "snake_case")]
pub enum Command {
    Move(Direction),
    PickUp,
    Drop,
}

impl Command {
    /// Wire name of the action.
    pub fn action(&self) -> &'static str {
        match self {
            Self::Move(_) => "move",
            Self::PickUp => "pick_up",
            Self::Drop => "drop",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(direction) => write!(f, "move {direction}"),
            other => f.write_str(other.action()),
        }
    }
}

/// The outcome of a successful command, before it is committed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Step {
    /// State after the command
    pub next: PuzzleState,
    /// History description of the command
    pub description: String,
}

/// Compute the effect of `command` on `state` without touching it.
///
/// This is a pure function: on success it returns the next state and the
/// history description, on failure the reason the command is illegal.
///
/// # Example
///
/// ```rust
/// use stackbot::core::{Direction, PuzzleState};
/// use stackbot::engine::{transition, Command};
///
/// let state = PuzzleState::default();
/// let step = transition(&state, Command::Move(Direction::Right)).unwrap();
/// assert_eq!(step.description, "Moved right");
/// assert_eq!(step.next.robot.position.x, 1);
///
/// assert!(transition(&state, Command::Move(Direction::Up)).is_err());
/// ```
pub fn transition(state: &PuzzleState, command: Command) -> Result<Step, PuzzleError> {
    let robot = state.robot;
    if !robot.position.in_bounds() {
        return Err(PuzzleError::OffGrid {
            position: robot.position,
        });
    }
    match command {
        Command::Move(direction) => {
            let position = robot
                .position
                .step(direction)
                .ok_or(PuzzleError::OutOfBounds {
                    direction,
                    from: robot.position,
                })?;
            let mut next = state.clone();
            next.robot.position = position;
            Ok(Step {
                next,
                description: format!("Moved {direction}"),
            })
        }
        Command::PickUp => {
            if let Some(held) = robot.holding {
                return Err(PuzzleError::AlreadyHolding { held });
            }
            let mut next = state.clone();
            let disc = next
                .grid
                .stack_mut(robot.position)
                .pop()
                .ok_or(PuzzleError::EmptyStack {
                    position: robot.position,
                })?;
            next.robot.holding = Some(disc);
            Ok(Step {
                next,
                description: format!("Picked up a {disc} circle"),
            })
        }
        Command::Drop => {
            let held = robot.holding.ok_or(PuzzleError::NothingHeld)?;
            if let Some(top) = state.grid.top(robot.position) {
                if !top.accepts(held) {
                    return Err(PuzzleError::StackingViolation { held, top });
                }
            }
            let mut next = state.clone();
            next.grid.stack_mut(robot.position).push(held);
            next.robot.holding = None;
            Ok(Step {
                next,
                description: format!("Dropped a {held} circle"),
            })
        }
    }
}

/// A puzzle instance: current state plus the history that led to it.
///
/// Commands are applied through [`Puzzle::apply`]. A successful command
/// replaces the state and appends exactly one history record; a failed one
/// leaves both untouched.
#[derive(Clone, Debug, Default)]
pub struct Puzzle {
    state: PuzzleState,
    history: MoveHistory,
}

impl Puzzle {
    /// Create a puzzle starting from `state` with an empty history.
    pub fn new(state: PuzzleState) -> Self {
        Self {
            state,
            history: MoveHistory::new(),
        }
    }

    /// Current state (pure)
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// History of successful commands (pure)
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Apply a command, committing the new state and history record together.
    pub fn apply(&mut self, command: Command) -> Result<&PuzzleState, PuzzleError> {
        let Step { next, description } = transition(&self.state, command)?;
        self.state = next;
        self.history.record(HistoryRecord::now(description));
        Ok(&self.state)
    }

    pub fn move_robot(&mut self, direction: Direction) -> Result<&PuzzleState, PuzzleError> {
        self.apply(Command::Move(direction))
    }

    pub fn pick_up(&mut self) -> Result<&PuzzleState, PuzzleError> {
        self.apply(Command::PickUp)
    }

    pub fn drop_disc(&mut self) -> Result<&PuzzleState, PuzzleError> {
        self.apply(Command::Drop)
    }
}
