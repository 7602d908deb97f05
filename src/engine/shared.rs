//! Thread-safe handle to the single puzzle instance.

use super::puzzle::{Command, Puzzle};
use crate::core::{Direction, HistoryRecord, PuzzleError, PuzzleState};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to one shared [`Puzzle`].
///
/// Every command and query runs under a single lock, so callers never see a
/// half-applied command or a partially appended history record.
///
/// # Example
///
/// ```rust
/// use stackbot::core::Direction;
/// use stackbot::engine::SharedPuzzle;
///
/// let puzzle = SharedPuzzle::default();
/// let handle = puzzle.clone();
///
/// handle.move_robot(Direction::Right).unwrap();
/// assert_eq!(puzzle.state().robot.position.x, 1);
/// assert_eq!(puzzle.history().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedPuzzle {
    inner: Arc<Mutex<Puzzle>>,
}

impl SharedPuzzle {
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            inner: Arc::new(Mutex::new(puzzle)),
        }
    }

    // Commands commit state and history in one assignment pair after all
    // checks pass, so a poisoned lock still guards a consistent puzzle.
    fn lock(&self) -> MutexGuard<'_, Puzzle> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a command and return a snapshot of the resulting state.
    pub fn apply(&self, command: Command) -> Result<PuzzleState, PuzzleError> {
        self.lock().apply(command).cloned()
    }

    pub fn move_robot(&self, direction: Direction) -> Result<PuzzleState, PuzzleError> {
        self.apply(Command::Move(direction))
    }

    pub fn pick_up(&self) -> Result<PuzzleState, PuzzleError> {
        self.apply(Command::PickUp)
    }

    pub fn drop_disc(&self) -> Result<PuzzleState, PuzzleError> {
        self.apply(Command::Drop)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> PuzzleState {
        self.lock().state().clone()
    }

    /// Copy of every history record, oldest first.
    pub fn history(&self) -> Vec<HistoryRecord> {
        self.lock().history().records().to_vec()
    }

    /// Run `f` against the puzzle while holding the lock.
    ///
    /// Use this when several reads must come from the same instant.
    pub fn inspect<R>(&self, f: impl FnOnce(&Puzzle) -> R) -> R {
        f(&self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Disc;
    use std::thread;

    #[test]
    fn clones_share_one_puzzle() {
        let a = SharedPuzzle::default();
        let b = a.clone();

        b.pick_up().unwrap();

        assert_eq!(a.state().robot.holding, Some(Disc::Red));
        assert_eq!(a.history().len(), 1);
    }

    #[test]
    fn failed_command_leaves_history_alone() {
        let puzzle = SharedPuzzle::default();
        assert!(puzzle.move_robot(Direction::Up).is_err());
        assert!(puzzle.drop_disc().is_err());
        assert!(puzzle.history().is_empty());
        assert_eq!(puzzle.state(), PuzzleState::default());
    }

    #[test]
    fn concurrent_moves_are_serialized() {
        let puzzle = SharedPuzzle::default();

        // Vertical moves only, so x stays 0 however the threads interleave.
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let puzzle = puzzle.clone();
                thread::spawn(move || {
                    let mut successes: usize = 0;
                    for _ in 0..50 {
                        if puzzle.move_robot(Direction::Down).is_ok() {
                            successes += 1;
                        }
                        if puzzle.move_robot(Direction::Up).is_ok() {
                            successes += 1;
                        }
                    }
                    successes
                })
            })
            .collect();

        let successes: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        let (position, recorded) =
            puzzle.inspect(|p| (p.state().robot.position, p.history().len()));
        assert_eq!(recorded, successes);
        assert!(position.in_bounds());
        assert_eq!(position.x, 0);
    }
}
