//! Change notifications and telemetry.
//!
//! Renderers subscribe to [`PuzzleObserver`] and receive a read-only
//! [`PuzzleSnapshot`] after every mutation. Telemetry is a separate,
//! best-effort channel: sink failures are logged and swallowed.

use super::error::TelemetryError;
use crate::core::{MoveRecord, PuzzlePhase, GOAL_TOWER, TOWER_COUNT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only view of a puzzle, handed to renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSnapshot {
    /// Identifier of the current game (changes on every reset)
    pub game_id: Uuid,
    /// Disk sizes per tower, bottom to top
    pub towers: [Vec<u32>; TOWER_COUNT],
    pub disk_count: u32,
    pub move_count: u64,
    pub minimum_moves: u64,
    pub phase: PuzzlePhase,
}

impl PuzzleSnapshot {
    /// Serialize for a renderer on the other side of a process boundary.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// True iff the goal tower holds every disk, whatever the phase.
    pub fn is_solved(&self) -> bool {
        self.towers[GOAL_TOWER].len() == self.disk_count as usize
    }
}

/// What changed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PuzzleEvent {
    /// Towers were refilled with a fresh game
    Reset { disk_count: u32 },
    /// A disk moved
    Moved(MoveRecord),
    /// The last move completed the puzzle
    Solved,
    /// Auto-solve playback began
    SolveStarted { total_moves: u64 },
    /// Auto-solve playback was stopped before completion
    SolveCancelled { applied: u64 },
    /// Auto-solve playback applied every move
    SolveFinished,
}

/// Receives a notification after every state change.
///
/// Closures taking `(&PuzzleEvent, &PuzzleSnapshot)` implement this trait.
pub trait PuzzleObserver: Send {
    fn on_event(&mut self, event: &PuzzleEvent, snapshot: &PuzzleSnapshot);
}

impl<F> PuzzleObserver for F
where
    F: FnMut(&PuzzleEvent, &PuzzleSnapshot) + Send,
{
    fn on_event(&mut self, event: &PuzzleEvent, snapshot: &PuzzleSnapshot) {
        self(event, snapshot)
    }
}

/// Fire-and-forget notification sent after each accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEvent {
    pub game_id: Uuid,
    pub move_count: u64,
    pub timestamp: DateTime<Utc>,
}

/// Destination for move telemetry.
pub trait TelemetrySink: Send {
    fn record_move(&mut self, event: &MoveEvent) -> Result<(), TelemetryError>;
}
