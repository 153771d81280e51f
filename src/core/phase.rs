//! Puzzle phase.
//!
//! The puzzle has no modal states beyond the tower contents; the phase is
//! derived from the auto-solving flag and whether the goal tower is full.

use serde::{Deserialize, Serialize};

/// Coarse phase of a puzzle, derived on demand.
///
/// # Example
///
/// ```rust
/// use hanoi::core::PuzzlePhase;
///
/// assert_eq!(PuzzlePhase::Playing.name(), "Playing");
/// assert!(PuzzlePhase::Solved.is_final());
/// assert!(!PuzzlePhase::AutoSolving.accepts_player_moves());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzlePhase {
    /// Waiting for player moves
    Playing,
    /// Auto-solve playback in progress; player moves are rejected
    AutoSolving,
    /// All disks are on the goal tower
    Solved,
}

impl PuzzlePhase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Playing => "Playing",
            Self::AutoSolving => "AutoSolving",
            Self::Solved => "Solved",
        }
    }

    /// Whether this is the display-only terminal phase.
    ///
    /// Shown as "game won"; moves are still accepted, see
    /// [`accepts_player_moves`](Self::accepts_player_moves).
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Solved)
    }

    /// Whether player-initiated moves are allowed.
    ///
    /// A solved puzzle still accepts moves; the player may keep shuffling
    /// disks until they reset.
    pub fn accepts_player_moves(&self) -> bool {
        !matches!(self, Self::AutoSolving)
    }
}
