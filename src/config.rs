//! Puzzle configuration.
//!
//! The disk count is the only gameplay input; the stall interval tunes the
//! "you seem stuck" hint. Validation uses Stillwater's `Validation` so every
//! problem is reported at once.
//!
//! # Example
//!
//! ```rust
//! use hanoi::config::PuzzleConfigBuilder;
//! use std::time::Duration;
//!
//! let config = PuzzleConfigBuilder::new()
//!     .disk_count(5)
//!     .stall_interval(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.disk_count, 5);
//! ```

use crate::puzzle::PuzzleError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Smallest playable disk count
pub const MIN_DISK_COUNT: u32 = 1;

/// Largest disk count a puzzle accepts (2^20 - 1 optimal moves)
pub const MAX_DISK_COUNT: u32 = 20;

pub const DEFAULT_DISK_COUNT: u32 = 3;

pub const DEFAULT_STALL_INTERVAL: Duration = Duration::from_secs(5);

/// Configuration problems
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Disk count must be at least {}", MIN_DISK_COUNT)]
    DiskCountTooSmall,

    #[error("Disk count {found} exceeds the maximum of {max}")]
    DiskCountTooLarge { max: u32, found: u32 },

    #[error("Stall interval must be greater than zero")]
    ZeroStallInterval,
}

/// Configuration surface for a puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Number of disks placed on the first tower at reset
    pub disk_count: u32,
    /// How often the stall tracker snapshots the move count
    pub stall_interval: Duration,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            disk_count: DEFAULT_DISK_COUNT,
            stall_interval: DEFAULT_STALL_INTERVAL,
        }
    }
}

impl PuzzleConfig {
    /// Default configuration with the given disk count.
    pub fn with_disk_count(disk_count: u32) -> Self {
        Self {
            disk_count,
            ..Self::default()
        }
    }

    /// Validate all settings, accumulating every violation.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let checks = vec![
            validate_disk_count(self.disk_count),
            if self.stall_interval.is_zero() {
                Validation::fail(ConfigError::ZeroStallInterval)
            } else {
                Validation::success(())
            },
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and convert into a `Result`.
    pub fn validated(self) -> Result<Self, PuzzleError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => Err(PuzzleError::InvalidConfig(
                errors.iter().cloned().collect(),
            )),
        }
    }
}

/// Check a disk count against the supported range.
pub fn validate_disk_count(disk_count: u32) -> Validation<(), NonEmptyVec<ConfigError>> {
    if disk_count < MIN_DISK_COUNT {
        Validation::fail(ConfigError::DiskCountTooSmall)
    } else if disk_count > MAX_DISK_COUNT {
        Validation::fail(ConfigError::DiskCountTooLarge {
            max: MAX_DISK_COUNT,
            found: disk_count,
        })
    } else {
        Validation::success(())
    }
}

/// Fluent builder for [`PuzzleConfig`]
pub struct PuzzleConfigBuilder {
    disk_count: Option<u32>,
    stall_interval: Option<Duration>,
}

impl PuzzleConfigBuilder {
    pub fn new() -> Self {
        Self {
            disk_count: None,
            stall_interval: None,
        }
    }

    /// Set the number of disks
    pub fn disk_count(mut self, n: u32) -> Self {
        self.disk_count = Some(n);
        self
    }

    /// Set the stall snapshot interval
    pub fn stall_interval(mut self, interval: Duration) -> Self {
        self.stall_interval = Some(interval);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<PuzzleConfig, PuzzleError> {
        let defaults = PuzzleConfig::default();
        PuzzleConfig {
            disk_count: self.disk_count.unwrap_or(defaults.disk_count),
            stall_interval: self.stall_interval.unwrap_or(defaults.stall_interval),
        }
        .validated()
    }
}

impl Default for PuzzleConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PuzzleConfig::default();
        assert_eq!(config.disk_count, 3);
        assert_eq!(config.stall_interval, Duration::from_secs(5));
        assert!(config.validate().is_success());
    }

    #[test]
    fn zero_disks_is_rejected() {
        let result = PuzzleConfig::with_disk_count(0).validated();
        match result {
            Err(PuzzleError::InvalidConfig(errors)) => {
                assert_eq!(errors, vec![ConfigError::DiskCountTooSmall]);
            }
            other => panic!("Expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn too_many_disks_is_rejected() {
        let result = validate_disk_count(MAX_DISK_COUNT + 1);
        assert!(result.is_failure());
        assert!(validate_disk_count(MAX_DISK_COUNT).is_success());
        assert!(validate_disk_count(MIN_DISK_COUNT).is_success());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = PuzzleConfig {
            disk_count: 0,
            stall_interval: Duration::ZERO,
        };

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::DiskCountTooSmall)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::ZeroStallInterval)));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn builder_applies_defaults() {
        let config = PuzzleConfigBuilder::new().build().unwrap();
        assert_eq!(config, PuzzleConfig::default());
    }

    #[test]
    fn builder_rejects_invalid_values() {
        let result = PuzzleConfigBuilder::new()
            .disk_count(21)
            .stall_interval(Duration::ZERO)
            .build();

        match result {
            Err(PuzzleError::InvalidConfig(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("Expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: PuzzleConfig = serde_json::from_str(r#"{"disk_count": 4}"#).unwrap();
        assert_eq!(config.disk_count, 4);
        assert_eq!(config.stall_interval, DEFAULT_STALL_INTERVAL);
    }

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(
            ConfigError::DiskCountTooSmall.to_string(),
            "Disk count must be at least 1"
        );
        assert_eq!(
            ConfigError::DiskCountTooLarge { max: 20, found: 30 }.to_string(),
            "Disk count 30 exceeds the maximum of 20"
        );
    }
}
