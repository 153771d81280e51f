//! Puzzle error types.

use crate::config::ConfigError;
use crate::core::peg_label;
use thiserror::Error;

/// Why a move was refused.
///
/// Rejections are expected and frequent. The puzzle is left untouched and
/// the player may simply try again.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("Source and destination are the same tower")]
    SameTower,

    #[error("Tower index {index} is out of range")]
    TowerOutOfRange { index: usize },

    #[error("Tower {} has no disk to move", peg_label(*.tower))]
    EmptySource { tower: usize },

    #[error("Disk {disk} cannot rest on smaller disk {top}")]
    LargerOntoSmaller { disk: u32, top: u32 },

    #[error("Moves are locked while the puzzle is solving itself")]
    AutoSolving,
}

/// Errors that can occur when creating or resetting a puzzle
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Invalid puzzle configuration: {}", describe(.0))]
    InvalidConfig(Vec<ConfigError>),
}

fn describe(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error reported by a telemetry sink.
///
/// Never propagated into game state; the puzzle logs it and moves on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Telemetry channel unavailable: {0}")]
    Unavailable(String),

    #[error("Telemetry delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Violation of the tower ordering or disk-set invariants
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Tower {} is not strictly decreasing bottom to top", peg_label(*.tower))]
    NotDecreasing { tower: usize },

    #[error("Disk {size} is missing")]
    MissingDisk { size: u32 },

    #[error("Disk {size} appears more than once")]
    DuplicateDisk { size: u32 },

    #[error("Disk {size} does not belong to this puzzle")]
    UnknownDisk { size: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages_use_peg_labels() {
        let err = MoveRejection::EmptySource { tower: 2 };
        assert_eq!(err.to_string(), "Tower C has no disk to move");
    }

    #[test]
    fn invalid_config_lists_every_problem() {
        let err = PuzzleError::InvalidConfig(vec![
            ConfigError::DiskCountTooSmall,
            ConfigError::ZeroStallInterval,
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid puzzle configuration: Disk count must be at least 1; \
             Stall interval must be greater than zero"
        );
    }
}
