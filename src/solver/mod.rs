//! Optimal solutions and auto-solve playback.
//!
//! The generator is a pure function of the disk count. Playback is modelled
//! as a [`SolveDriver`] that applies one precomputed move per call to
//! [`SolveDriver::step`]; the caller owns the clock.
//!
//! # Example
//!
//! ```rust
//! use hanoi::solver::{generate_optimal_sequence, minimum_moves, TowerMove};
//!
//! let moves = generate_optimal_sequence(2, 0, 1, 2);
//! assert_eq!(moves.len() as u64, minimum_moves(2));
//! assert_eq!(
//!     moves,
//!     vec![TowerMove::new(0, 1), TowerMove::new(0, 2), TowerMove::new(1, 2)]
//! );
//! ```

mod driver;

pub use driver::{SolveDriver, StepOutcome};

use crate::config::MAX_DISK_COUNT;
use crate::core::peg_label;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A move between two towers, without reference to any puzzle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TowerMove {
    pub from: usize,
    pub to: usize,
}

impl TowerMove {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl From<(usize, usize)> for TowerMove {
    fn from((from, to): (usize, usize)) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for TowerMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", peg_label(self.from), peg_label(self.to))
    }
}

/// Optimal solution length for `disk_count` disks: `2^n - 1`.
///
/// Saturates at `u64::MAX` for 64 or more disks.
pub fn minimum_moves(disk_count: u32) -> u64 {
    if disk_count >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << disk_count) - 1
    }
}

/// Classic recursive solution moving `disk_count` disks from `source` to
/// `destination`.
///
/// Produces exactly `2^n - 1` moves and an empty sequence for zero disks.
pub fn generate_optimal_sequence(
    disk_count: u32,
    source: usize,
    auxiliary: usize,
    destination: usize,
) -> Vec<TowerMove> {
    let mut moves = if disk_count <= MAX_DISK_COUNT {
        Vec::with_capacity(minimum_moves(disk_count) as usize)
    } else {
        Vec::new()
    };
    solve_into(disk_count, source, auxiliary, destination, &mut moves);
    moves
}

/// Optimal sequence from the canonical start (tower 0) to the goal (tower 2).
pub fn optimal_sequence(disk_count: u32) -> Vec<TowerMove> {
    generate_optimal_sequence(disk_count, 0, 1, 2)
}

fn solve_into(
    n: u32,
    source: usize,
    auxiliary: usize,
    destination: usize,
    moves: &mut Vec<TowerMove>,
) {
    if n == 0 {
        return;
    }
    solve_into(n - 1, source, destination, auxiliary, moves);
    moves.push(TowerMove::new(source, destination));
    solve_into(n - 1, auxiliary, source, destination, moves);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(moves: &[TowerMove]) -> Vec<(usize, usize)> {
        moves.iter().map(|m| (m.from, m.to)).collect()
    }

    #[test]
    fn minimum_moves_matches_formula() {
        assert_eq!(minimum_moves(0), 0);
        assert_eq!(minimum_moves(1), 1);
        assert_eq!(minimum_moves(3), 7);
        assert_eq!(minimum_moves(10), 1023);
        assert_eq!(minimum_moves(63), u64::MAX >> 1);
        assert_eq!(minimum_moves(64), u64::MAX);
    }

    #[test]
    fn zero_disks_needs_no_moves() {
        assert!(optimal_sequence(0).is_empty());
    }

    #[test]
    fn three_disk_sequence_is_canonical() {
        assert_eq!(
            pairs(&optimal_sequence(3)),
            vec![(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)]
        );
    }

    #[test]
    fn custom_pegs_are_respected() {
        assert_eq!(
            pairs(&generate_optimal_sequence(2, 2, 0, 1)),
            vec![(2, 0), (2, 1), (0, 1)]
        );
    }

    #[test]
    fn sequence_is_deterministic() {
        assert_eq!(optimal_sequence(6), optimal_sequence(6));
    }

    #[test]
    fn largest_disk_moves_once_in_the_middle() {
        let moves = optimal_sequence(4);
        let middle = moves.len() / 2;
        assert_eq!(moves[middle], TowerMove::new(0, 2));
    }

    #[test]
    fn tower_move_converts_from_pair() {
        assert_eq!(TowerMove::from((1, 2)), TowerMove::new(1, 2));
        assert_eq!(TowerMove::new(0, 2).to_string(), "A -> C");
    }
}
