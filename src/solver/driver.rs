//! Step-driven auto-solve playback.

use super::{optimal_sequence, TowerMove};
use crate::core::MoveRecord;
use crate::puzzle::{MoveRejection, Puzzle};
use tracing::{instrument, warn};

/// Result of advancing playback by one step
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// One move was applied
    Applied(MoveRecord),

    /// Every move has already been applied
    Finished,

    /// Playback was stopped, either here or underneath the driver
    Cancelled,

    /// The puzzle refused the next move; playback stops
    Rejected(MoveRejection),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Playback {
    Running,
    Finished,
    Cancelled,
}

/// Plays the optimal sequence back one move at a time.
///
/// The driver does not own the puzzle or a timer. A scheduler calls
/// [`step`](Self::step) on every tick and stops once it returns anything
/// other than [`StepOutcome::Applied`].
///
/// # Example
///
/// ```rust
/// use hanoi::puzzle::Puzzle;
/// use hanoi::solver::{SolveDriver, StepOutcome};
///
/// let mut puzzle = Puzzle::new(3).unwrap();
/// let mut driver = SolveDriver::start(&mut puzzle).unwrap();
///
/// while let StepOutcome::Applied(_) = driver.step(&mut puzzle) {}
///
/// assert!(puzzle.is_solved());
/// assert_eq!(puzzle.move_count(), 7);
/// assert!(!puzzle.is_auto_solving());
/// ```
#[derive(Clone, Debug)]
pub struct SolveDriver {
    moves: Vec<TowerMove>,
    cursor: usize,
    generation: u64,
    playback: Playback,
}

impl SolveDriver {
    /// Restart the puzzle and queue its optimal solution.
    ///
    /// Player moves are rejected until playback finishes or is cancelled.
    /// Fails if another playback is already running on this puzzle.
    #[instrument(skip(puzzle), fields(disk_count = puzzle.disk_count()))]
    pub fn start(puzzle: &mut Puzzle) -> Result<Self, MoveRejection> {
        if puzzle.is_auto_solving() {
            return Err(MoveRejection::AutoSolving);
        }

        puzzle.restart();
        let moves = optimal_sequence(puzzle.disk_count());
        puzzle.begin_auto_solve(moves.len() as u64);

        Ok(Self {
            moves,
            cursor: 0,
            generation: puzzle.generation(),
            playback: Playback::Running,
        })
    }

    /// Apply the next move.
    pub fn step(&mut self, puzzle: &mut Puzzle) -> StepOutcome {
        match self.playback {
            Playback::Finished => return StepOutcome::Finished,
            Playback::Cancelled => return StepOutcome::Cancelled,
            Playback::Running => {}
        }

        if !self.owns(puzzle) {
            self.playback = Playback::Cancelled;
            return StepOutcome::Cancelled;
        }

        let Some(next) = self.moves.get(self.cursor).copied() else {
            self.finish(puzzle);
            return StepOutcome::Finished;
        };

        match puzzle.apply_solver_move(next.from, next.to) {
            Ok(record) => {
                self.cursor += 1;
                if self.cursor == self.moves.len() {
                    self.finish(puzzle);
                }
                StepOutcome::Applied(record)
            }
            Err(rejection) => {
                warn!(%rejection, step = self.cursor, "solver move rejected");
                self.playback = Playback::Cancelled;
                puzzle.cancel_solve();
                StepOutcome::Rejected(rejection)
            }
        }
    }

    /// Apply every remaining move. Returns how many were applied.
    pub fn run_to_end(&mut self, puzzle: &mut Puzzle) -> usize {
        let mut applied = 0;
        while let StepOutcome::Applied(_) = self.step(puzzle) {
            applied += 1;
        }
        applied
    }

    /// Stop playback. Moves already applied stay applied.
    ///
    /// Returns `false` if playback was not running.
    pub fn cancel(&mut self, puzzle: &mut Puzzle) -> bool {
        if self.playback != Playback::Running {
            return false;
        }
        self.playback = Playback::Cancelled;
        if self.owns(puzzle) {
            puzzle.cancel_solve();
        }
        true
    }

    /// The full precomputed sequence
    pub fn moves(&self) -> &[TowerMove] {
        &self.moves
    }

    /// Move the next step would apply, if still running
    pub fn next_move(&self) -> Option<TowerMove> {
        match self.playback {
            Playback::Running => self.moves.get(self.cursor).copied(),
            _ => None,
        }
    }

    pub fn applied(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.moves.len() - self.cursor
    }

    pub fn total(&self) -> usize {
        self.moves.len()
    }

    pub fn is_running(&self) -> bool {
        self.playback == Playback::Running
    }

    pub fn is_finished(&self) -> bool {
        self.playback == Playback::Finished
    }

    pub fn is_cancelled(&self) -> bool {
        self.playback == Playback::Cancelled
    }

    /// Whether the puzzle is still the game this driver started, with
    /// playback not cancelled underneath it.
    fn owns(&self, puzzle: &Puzzle) -> bool {
        puzzle.generation() == self.generation && puzzle.is_auto_solving()
    }

    fn finish(&mut self, puzzle: &mut Puzzle) {
        self.playback = Playback::Finished;
        puzzle.finish_auto_solve();
    }
}
