//! The puzzle state machine.
//!
//! [`Puzzle`] owns the three towers and is the only place disks move. The
//! single mutation path is [`Puzzle::move_disk`] (plus the solver's
//! privileged variant); every accepted move is logged, counted, reported to
//! observers and forwarded to telemetry.
//!
//! # Example
//!
//! ```rust
//! use hanoi::puzzle::{MoveRejection, Puzzle};
//!
//! let mut puzzle = Puzzle::new(2).unwrap();
//!
//! assert!(puzzle.move_disk(0, 1).is_ok());
//! assert_eq!(
//!     puzzle.move_disk(0, 1),
//!     Err(MoveRejection::LargerOntoSmaller { disk: 2, top: 1 })
//! );
//!
//! puzzle.move_disk(0, 2).unwrap();
//! puzzle.move_disk(1, 2).unwrap();
//! assert!(puzzle.is_solved());
//! assert_eq!(puzzle.move_count(), 3);
//! ```

mod error;
mod hint;
mod observer;

pub use error::{InvariantViolation, MoveRejection, PuzzleError, TelemetryError};
pub use hint::{classify, Hint, HintSignals, StallTracker, SUBOPTIMAL_THRESHOLD};
pub use observer::{MoveEvent, PuzzleEvent, PuzzleObserver, PuzzleSnapshot, TelemetrySink};

use crate::config::{validate_disk_count, PuzzleConfig};
use crate::core::{Disk, MoveLog, MoveRecord, PuzzlePhase, Tower, GOAL_TOWER, TOWER_COUNT};
use crate::solver::minimum_moves;
use chrono::{DateTime, Utc};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// A Tower of Hanoi game.
pub struct Puzzle {
    config: PuzzleConfig,
    game_id: Uuid,
    towers: [Tower; TOWER_COUNT],
    move_log: MoveLog,
    move_count: u64,
    auto_solving: bool,
    generation: u64,
    stall: StallTracker,
    observers: Vec<Box<dyn PuzzleObserver>>,
    telemetry: Option<Box<dyn TelemetrySink>>,
}

impl Puzzle {
    /// Create a puzzle with `disk_count` disks on the first tower.
    pub fn new(disk_count: u32) -> Result<Self, PuzzleError> {
        Self::from_config(PuzzleConfig::with_disk_count(disk_count))
    }

    /// Create a puzzle from a full configuration.
    pub fn from_config(config: PuzzleConfig) -> Result<Self, PuzzleError> {
        let config = config.validated()?;
        let mut puzzle = Self {
            stall: StallTracker::new(config.stall_interval, Utc::now()),
            config,
            game_id: Uuid::new_v4(),
            towers: [Tower::new(0), Tower::new(1), Tower::new(2)],
            move_log: MoveLog::new(),
            move_count: 0,
            auto_solving: false,
            generation: 0,
            observers: Vec::new(),
            telemetry: None,
        };
        puzzle.fill();
        Ok(puzzle)
    }

    /// Start a new game with `disk_count` disks.
    ///
    /// Clears the move count, the log and the auto-solving flag. An invalid
    /// disk count is reported and leaves the current game untouched.
    #[instrument(skip(self))]
    pub fn reset(&mut self, disk_count: u32) -> Result<(), PuzzleError> {
        if let Validation::Failure(errors) = validate_disk_count(disk_count) {
            let errors: Vec<_> = errors.iter().cloned().collect();
            warn!(?errors, "rejected reset");
            return Err(PuzzleError::InvalidConfig(errors));
        }

        self.config.disk_count = disk_count;
        self.restart();
        Ok(())
    }

    /// Start a new game with the current disk count.
    pub fn restart(&mut self) {
        self.game_id = Uuid::new_v4();
        self.generation += 1;
        self.move_count = 0;
        self.move_log.clear();
        self.auto_solving = false;
        self.stall.restart(Utc::now());
        self.fill();

        info!(
            game_id = %self.game_id,
            disk_count = self.config.disk_count,
            "puzzle reset"
        );
        self.notify(PuzzleEvent::Reset {
            disk_count: self.config.disk_count,
        });
    }

    fn fill(&mut self) {
        for tower in &mut self.towers {
            tower.clear();
        }
        for disk in (1..=self.config.disk_count).rev().filter_map(Disk::new) {
            self.towers[0].push(disk);
        }
    }

    /// Register a renderer or other listener.
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: PuzzleObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Attach a telemetry sink, replacing any previous one.
    pub fn set_telemetry<T>(&mut self, sink: T)
    where
        T: TelemetrySink + 'static,
    {
        self.telemetry = Some(Box::new(sink));
    }

    /// Active configuration
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Number of disks in the current game
    pub fn disk_count(&self) -> u32 {
        self.config.disk_count
    }

    /// Identifier of the current game; changes on every reset
    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    /// All three towers, indexed 0 to 2
    pub fn towers(&self) -> &[Tower; TOWER_COUNT] {
        &self.towers
    }

    /// Tower at `index`, if in range
    pub fn tower(&self, index: usize) -> Option<&Tower> {
        self.towers.get(index)
    }

    /// Accepted moves since the last reset
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Ordered log of accepted moves
    pub fn move_log(&self) -> &MoveLog {
        &self.move_log
    }

    /// Whether auto-solve playback holds the move lock
    pub fn is_auto_solving(&self) -> bool {
        self.auto_solving
    }

    /// Counter bumped on every reset; lets a solve driver detect that the
    /// game it was started on is gone.
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Optimal solution length for the current disk count
    pub fn minimum_moves(&self) -> u64 {
        minimum_moves(self.config.disk_count)
    }

    /// True iff the goal tower holds every disk.
    pub fn is_solved(&self) -> bool {
        self.towers[GOAL_TOWER].len() == self.config.disk_count as usize
    }

    /// Phase derived from the lock and the goal tower
    pub fn phase(&self) -> PuzzlePhase {
        if self.auto_solving {
            PuzzlePhase::AutoSolving
        } else if self.is_solved() {
            PuzzlePhase::Solved
        } else {
            PuzzlePhase::Playing
        }
    }

    /// Whether a player move from `from` to `to` would be accepted.
    pub fn can_move(&self, from: usize, to: usize) -> bool {
        self.check_move(from, to).is_ok()
    }

    /// Explain whether a player move would be accepted. Pure.
    pub fn check_move(&self, from: usize, to: usize) -> Result<(), MoveRejection> {
        if !self.phase().accepts_player_moves() {
            return Err(MoveRejection::AutoSolving);
        }
        self.check_legal(from, to)
    }

    fn check_legal(&self, from: usize, to: usize) -> Result<(), MoveRejection> {
        for index in [from, to] {
            if index >= TOWER_COUNT {
                return Err(MoveRejection::TowerOutOfRange { index });
            }
        }
        if from == to {
            return Err(MoveRejection::SameTower);
        }

        let source = &self.towers[from];
        let Some(disk) = source.top_disk() else {
            return Err(MoveRejection::EmptySource { tower: from });
        };

        let top = self.towers[to].top_disk_size();
        if disk.size() < top {
            Ok(())
        } else {
            Err(MoveRejection::LargerOntoSmaller {
                disk: disk.size(),
                top,
            })
        }
    }

    /// Move the top disk of `from` onto `to`.
    ///
    /// Illegal moves and moves attempted during auto-solve are rejected and
    /// leave the puzzle unchanged.
    #[instrument(skip(self))]
    pub fn move_disk(&mut self, from: usize, to: usize) -> Result<MoveRecord, MoveRejection> {
        if !self.phase().accepts_player_moves() {
            debug!("player move rejected during auto-solve");
            return Err(MoveRejection::AutoSolving);
        }
        self.apply_move(from, to)
    }

    /// Move path used by the solve driver; bypasses the auto-solve lock.
    pub(crate) fn apply_solver_move(
        &mut self,
        from: usize,
        to: usize,
    ) -> Result<MoveRecord, MoveRejection> {
        self.apply_move(from, to)
    }

    fn apply_move(&mut self, from: usize, to: usize) -> Result<MoveRecord, MoveRejection> {
        if let Err(rejection) = self.check_legal(from, to) {
            debug!(%rejection, "move rejected");
            return Err(rejection);
        }

        let disk = self.towers[from]
            .pop()
            .map_err(|_| MoveRejection::EmptySource { tower: from })?;
        self.towers[to].push(disk);
        self.move_count += 1;
        let record = self.move_log.record(from, to, disk.size()).clone();

        debug!(
            sequence = record.sequence,
            disk = record.disk_size,
            "move applied"
        );

        self.notify(PuzzleEvent::Moved(record.clone()));
        self.send_telemetry();

        if self.is_solved() {
            info!(move_count = self.move_count, "puzzle solved");
            self.notify(PuzzleEvent::Solved);
        }

        Ok(record)
    }

    /// Advance the stall tracker with the caller's clock.
    ///
    /// Returns `true` if the tracker took a new snapshot.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        self.stall.observe(now, self.move_count)
    }

    pub fn is_stuck(&self) -> bool {
        self.stall.is_stuck(self.move_count)
    }

    /// Signals the hint classifier looks at
    pub fn hint_signals(&self) -> HintSignals {
        HintSignals {
            move_count: self.move_count,
            disk_count: self.config.disk_count,
            goal_len: self.towers[GOAL_TOWER].len(),
            middle_len: self.towers[1].len(),
            is_stuck: self.is_stuck(),
        }
    }

    /// Advisory hint for the current position. Never mutates.
    pub fn hint(&self) -> Hint {
        classify(&self.hint_signals())
    }

    pub fn snapshot(&self) -> PuzzleSnapshot {
        PuzzleSnapshot {
            game_id: self.game_id,
            towers: [
                self.towers[0].sizes(),
                self.towers[1].sizes(),
                self.towers[2].sizes(),
            ],
            disk_count: self.config.disk_count,
            move_count: self.move_count,
            minimum_moves: self.minimum_moves(),
            phase: self.phase(),
        }
    }

    /// Check tower ordering and the disk set, accumulating every violation.
    pub fn verify(&self) -> Validation<(), NonEmptyVec<InvariantViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<InvariantViolation>>> =
            vec![Validation::success(())];

        for tower in &self.towers {
            if !tower.is_ordered() {
                checks.push(Validation::fail(InvariantViolation::NotDecreasing {
                    tower: tower.index(),
                }));
            }
        }

        let disk_count = self.config.disk_count as usize;
        let mut seen = vec![0usize; disk_count + 1];
        for size in self.towers.iter().flat_map(|t| t.disks()).map(Disk::size) {
            match seen.get_mut(size as usize) {
                Some(count) => *count += 1,
                None => checks.push(Validation::fail(InvariantViolation::UnknownDisk { size })),
            }
        }
        for (size, count) in seen.iter().enumerate().skip(1) {
            let size = size as u32;
            match *count {
                0 => checks.push(Validation::fail(InvariantViolation::MissingDisk { size })),
                1 => {}
                _ => checks.push(Validation::fail(InvariantViolation::DuplicateDisk { size })),
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Stop auto-solve playback. Moves already applied stay applied.
    ///
    /// Returns `false` if no playback was running.
    #[instrument(skip(self))]
    pub fn cancel_solve(&mut self) -> bool {
        if !self.auto_solving {
            return false;
        }
        self.auto_solving = false;
        info!(applied = self.move_count, "auto-solve cancelled");
        self.notify(PuzzleEvent::SolveCancelled {
            applied: self.move_count,
        });
        true
    }

    pub(crate) fn begin_auto_solve(&mut self, total_moves: u64) {
        self.auto_solving = true;
        info!(total_moves, "auto-solve started");
        self.notify(PuzzleEvent::SolveStarted { total_moves });
    }

    pub(crate) fn finish_auto_solve(&mut self) {
        self.auto_solving = false;
        info!(move_count = self.move_count, "auto-solve finished");
        self.notify(PuzzleEvent::SolveFinished);
    }

    fn notify(&mut self, event: PuzzleEvent) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.on_event(&event, &snapshot);
        }
    }

    fn send_telemetry(&mut self) {
        let Some(sink) = self.telemetry.as_mut() else {
            return;
        };
        let event = MoveEvent {
            game_id: self.game_id,
            move_count: self.move_count,
            timestamp: Utc::now(),
        };
        if let Err(error) = sink.record_move(&event) {
            warn!(%error, move_count = event.move_count, "telemetry delivery failed");
        }
    }
}

impl fmt::Debug for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Puzzle")
            .field("game_id", &self.game_id)
            .field("towers", &self.towers)
            .field("disk_count", &self.config.disk_count)
            .field("move_count", &self.move_count)
            .field("auto_solving", &self.auto_solving)
            .field("observers", &self.observers.len())
            .field("telemetry", &self.telemetry.is_some())
            .finish()
    }
}
