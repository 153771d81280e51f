//! Hanoi: a pure Tower of Hanoi puzzle core
//!
//! The crate holds the puzzle's state machine and nothing else. Rendering,
//! input gestures, animation and timers belong to the presentation layer,
//! which drives the puzzle through an explicit command interface and listens
//! for change notifications.
//!
//! # Core Concepts
//!
//! - **Towers and disks**: dumb value types in [`core`]
//! - **Puzzle**: legality, the move log, hints and notifications in [`puzzle`]
//! - **Solver**: the optimal sequence and a step-driven playback in [`solver`]
//! - **Config**: the disk count and stall interval in [`config`]
//!
//! # Example
//!
//! ```rust
//! use hanoi::puzzle::{Puzzle, PuzzleEvent, PuzzleSnapshot};
//! use hanoi::solver::{SolveDriver, StepOutcome};
//!
//! let mut puzzle = Puzzle::new(3).unwrap();
//! puzzle.subscribe(|event: &PuzzleEvent, snapshot: &PuzzleSnapshot| {
//!     if let PuzzleEvent::Moved(record) = event {
//!         println!("{} (move {})", record, snapshot.move_count);
//!     }
//! });
//!
//! let mut driver = SolveDriver::start(&mut puzzle).unwrap();
//! // A real scheduler would call step() once per timer tick.
//! while let StepOutcome::Applied(_) = driver.step(&mut puzzle) {}
//!
//! assert!(puzzle.is_solved());
//! assert_eq!(puzzle.move_count(), puzzle.minimum_moves());
//! ```

pub mod config;
pub mod core;
pub mod puzzle;
pub mod solver;

// Re-export commonly used types
pub use config::{PuzzleConfig, PuzzleConfigBuilder};
pub use core::{Disk, MoveLog, MoveRecord, PuzzlePhase, Tower};
pub use puzzle::{Hint, MoveRejection, Puzzle, PuzzleError, PuzzleEvent, PuzzleSnapshot};
pub use solver::{generate_optimal_sequence, minimum_moves, SolveDriver, StepOutcome, TowerMove};
