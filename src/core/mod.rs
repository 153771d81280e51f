//! Core puzzle value types.
//!
//! This module contains the leaf building blocks of the puzzle:
//! - Disks with an immutable size
//! - Towers as dumb ordered stacks
//! - The move log
//! - The derived puzzle phase
//!
//! Nothing here enforces move legality; that lives in [`crate::puzzle`].

mod disk;
mod history;
mod phase;
mod tower;

pub use disk::Disk;
pub use history::{MoveLog, MoveRecord};
pub use phase::PuzzlePhase;
pub use tower::{peg_label, Tower, TowerError, EMPTY_TOWER_SENTINEL, GOAL_TOWER, TOWER_COUNT};
