//! Advisory hints.
//!
//! Hints are a heuristic classification over a few derived signals. They can
//! be wrong; they never touch puzzle state.

use crate::solver::minimum_moves;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Extra moves over the remaining optimum before the player is nudged
pub const SUBOPTIMAL_THRESHOLD: i128 = 5;

const SITUATIONAL_HINTS: [&str; 5] = [
    "Look for the smallest disk - it should move in a consistent cycle between towers.",
    "After moving the smallest disk, there's always exactly one other valid move. Can you spot it?",
    "Think about which tower needs to be cleared to receive the next largest disk.",
    "The Tower of Hanoi has a recursive pattern. How you moved 2 disks is how you'll move groups of disks.",
    "Sometimes you need to make moves that temporarily seem to take you further from your goal.",
];

/// Advisory category selected for the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hint {
    /// No move has been made yet
    FirstMove,
    /// The move count has not changed since the last stall snapshot
    Stuck,
    /// Well past the optimal pace
    Suboptimal,
    /// The goal tower is nearly full
    NearCompletion,
    /// General advice, chosen by position
    Situational(usize),
}

impl Hint {
    /// Text shown to the player
    pub fn message(&self) -> &'static str {
        match self {
            Self::FirstMove => {
                "Start by moving the smallest disk. For an odd number of disks, move it to the \
                 destination tower; for even, move to the auxiliary tower."
            }
            Self::Stuck => {
                "You seem stuck. Remember the pattern: move the smallest disk in a clockwise \
                 direction (A to B, B to C, or C to A), then make the only valid move that \
                 doesn't involve the smallest disk."
            }
            Self::Suboptimal => {
                "Your solution is taking longer than needed. Try to develop a consistent \
                 pattern when moving the disks."
            }
            Self::NearCompletion => {
                "You're almost there! Focus on moving the remaining smaller disks in the right \
                 sequence to build on top of the larger ones."
            }
            Self::Situational(index) => SITUATIONAL_HINTS[index % SITUATIONAL_HINTS.len()],
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Signals the classifier looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HintSignals {
    pub move_count: u64,
    pub disk_count: u32,
    /// Disks on the goal tower
    pub goal_len: usize,
    /// Disks on the middle tower
    pub middle_len: usize,
    pub is_stuck: bool,
}

impl HintSignals {
    /// Moves made beyond a rough estimate of what remains optimal.
    ///
    /// The estimate credits two moves per disk already on the goal tower. It
    /// is intentionally loose and can be negative.
    pub fn suboptimal_moves(&self) -> i128 {
        let optimal = i128::from(minimum_moves(self.disk_count));
        let credited = 2 * self.goal_len as i128;
        i128::from(self.move_count) - (optimal - credited)
    }

    pub fn near_completion(&self) -> bool {
        self.goal_len >= self.disk_count.saturating_sub(2) as usize
    }
}

/// Pick a hint category. Pure.
pub fn classify(signals: &HintSignals) -> Hint {
    if signals.move_count == 0 {
        Hint::FirstMove
    } else if signals.is_stuck {
        Hint::Stuck
    } else if signals.suboptimal_moves() > SUBOPTIMAL_THRESHOLD {
        Hint::Suboptimal
    } else if signals.near_completion() {
        Hint::NearCompletion
    } else {
        let seed = signals.move_count as usize + signals.disk_count as usize + signals.middle_len;
        Hint::Situational(seed % SITUATIONAL_HINTS.len())
    }
}

/// Best-effort stall detector.
///
/// Snapshots the move count whenever at least `interval` has passed since
/// the previous snapshot. The caller drives it from its own clock; nothing
/// here guarantees a stalled player is actually stuck.
#[derive(Clone, Debug)]
pub struct StallTracker {
    interval: Duration,
    last_snapshot_at: DateTime<Utc>,
    snapshot_move_count: u64,
}

impl StallTracker {
    pub fn new(interval: Duration, now: DateTime<Utc>) -> Self {
        Self {
            interval,
            last_snapshot_at: now,
            snapshot_move_count: 0,
        }
    }

    /// Advance the clock. Returns `true` if a new snapshot was taken.
    pub fn observe(&mut self, now: DateTime<Utc>, move_count: u64) -> bool {
        let elapsed = now
            .signed_duration_since(self.last_snapshot_at)
            .to_std()
            .unwrap_or(Duration::ZERO);

        if elapsed < self.interval {
            return false;
        }

        self.last_snapshot_at = now;
        self.snapshot_move_count = move_count;
        true
    }

    /// Whether no move happened since the last snapshot
    pub fn is_stuck(&self, move_count: u64) -> bool {
        move_count > 0 && move_count == self.snapshot_move_count
    }

    pub fn snapshot_move_count(&self) -> u64 {
        self.snapshot_move_count
    }

    pub(crate) fn restart(&mut self, now: DateTime<Utc>) {
        self.last_snapshot_at = now;
        self.snapshot_move_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(move_count: u64, disk_count: u32, goal_len: usize) -> HintSignals {
        HintSignals {
            move_count,
            disk_count,
            goal_len,
            middle_len: 0,
            is_stuck: false,
        }
    }

    #[test]
    fn fresh_game_gets_first_move_hint() {
        let mut s = signals(0, 5, 0);
        s.is_stuck = true;
        assert_eq!(classify(&s), Hint::FirstMove);
    }

    #[test]
    fn stuck_takes_priority_over_pace() {
        let mut s = signals(100, 3, 0);
        s.is_stuck = true;
        assert_eq!(classify(&s), Hint::Stuck);
    }

    #[test]
    fn slow_pace_is_flagged() {
        // 3 disks: optimum 7, so 13 moves with nothing on the goal tower is 6 over
        assert_eq!(signals(13, 3, 0).suboptimal_moves(), 6);
        assert_eq!(classify(&signals(13, 3, 0)), Hint::Suboptimal);
        assert_ne!(classify(&signals(12, 3, 0)), Hint::Suboptimal);
    }

    #[test]
    fn goal_tower_disks_earn_credit() {
        assert_eq!(signals(10, 4, 2).suboptimal_moves(), 10 - (15 - 4));
    }

    #[test]
    fn near_completion_when_goal_tower_almost_full() {
        assert_eq!(classify(&signals(4, 6, 4)), Hint::NearCompletion);
        assert!(!signals(4, 6, 3).near_completion());
    }

    #[test]
    fn small_puzzles_are_always_near_completion() {
        assert!(signals(1, 1, 0).near_completion());
        assert!(signals(1, 2, 0).near_completion());
    }

    #[test]
    fn situational_hint_depends_on_position() {
        let mut s = signals(3, 6, 0);
        s.middle_len = 2;
        // (3 + 6 + 2) % 5
        assert_eq!(classify(&s), Hint::Situational(1));
    }

    #[test]
    fn every_hint_has_a_message() {
        let hints = [
            Hint::FirstMove,
            Hint::Stuck,
            Hint::Suboptimal,
            Hint::NearCompletion,
            Hint::Situational(0),
            Hint::Situational(4),
        ];
        for hint in hints {
            assert!(!hint.message().is_empty());
            assert_eq!(hint.to_string(), hint.message());
        }
    }

    #[test]
    fn tracker_snapshots_after_interval() {
        let start = Utc::now();
        let mut tracker = StallTracker::new(Duration::from_secs(5), start);

        assert!(!tracker.observe(start + chrono::Duration::seconds(2), 3));
        assert!(!tracker.is_stuck(3));

        assert!(tracker.observe(start + chrono::Duration::seconds(5), 3));
        assert!(tracker.is_stuck(3));
        assert!(!tracker.is_stuck(4));
    }

    #[test]
    fn tracker_never_reports_stuck_before_first_move() {
        let start = Utc::now();
        let mut tracker = StallTracker::new(Duration::from_secs(1), start);
        tracker.observe(start + chrono::Duration::seconds(10), 0);
        assert!(!tracker.is_stuck(0));
    }

    #[test]
    fn clock_going_backwards_takes_no_snapshot() {
        let start = Utc::now();
        let mut tracker = StallTracker::new(Duration::from_secs(1), start);
        assert!(!tracker.observe(start - chrono::Duration::seconds(10), 2));
        assert_eq!(tracker.snapshot_move_count(), 0);
    }

    #[test]
    fn restart_clears_snapshot() {
        let start = Utc::now();
        let mut tracker = StallTracker::new(Duration::from_secs(1), start);
        tracker.observe(start + chrono::Duration::seconds(2), 4);
        tracker.restart(start + chrono::Duration::seconds(3));
        assert_eq!(tracker.snapshot_move_count(), 0);
        assert!(!tracker.is_stuck(4));
    }
}
