//! Towers: dumb ordered stacks of disks.
//!
//! A tower performs no legality checks of its own. Callers validate a move
//! before pushing; see [`crate::puzzle::Puzzle::check_move`].

use super::disk::Disk;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of towers in a puzzle
pub const TOWER_COUNT: usize = 3;

/// Index of the tower all disks must end up on
pub const GOAL_TOWER: usize = 2;

/// Top size reported by an empty tower.
///
/// Larger than any real disk, so "anything may land here" compares the same
/// way as a real top disk.
pub const EMPTY_TOWER_SENTINEL: u32 = u32::MAX;

/// Display label for a tower index (`0 -> 'A'`, `1 -> 'B'`, `2 -> 'C'`).
///
/// Out-of-range indices render as `'?'`.
pub fn peg_label(index: usize) -> char {
    match index {
        0 => 'A',
        1 => 'B',
        2 => 'C',
        _ => '?',
    }
}

/// Errors raised by tower operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TowerError {
    #[error("Tower {} is empty", peg_label(*.index))]
    Empty { index: usize },
}

/// An ordered stack of disks, bottom to top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tower {
    index: usize,
    disks: Vec<Disk>,
}

impl Tower {
    /// Create an empty tower at the given index
    pub fn new(index: usize) -> Self {
        Self {
            index,
            disks: Vec::new(),
        }
    }

    /// Position of this tower (0 to 2)
    pub fn index(&self) -> usize {
        self.index
    }

    /// Size of the top disk, or [`EMPTY_TOWER_SENTINEL`] when empty.
    pub fn top_disk_size(&self) -> u32 {
        self.disks
            .last()
            .map_or(EMPTY_TOWER_SENTINEL, |disk| disk.size())
    }

    /// Top disk, if any
    pub fn top_disk(&self) -> Option<&Disk> {
        self.disks.last()
    }

    /// Append a disk. The caller must have validated legality.
    pub fn push(&mut self, disk: Disk) {
        debug_assert!(
            self.disks.last().is_none_or(|top| disk.fits_on(top)),
            "illegal push of {disk} onto tower {}",
            peg_label(self.index)
        );
        self.disks.push(disk);
    }

    /// Remove and return the top disk.
    pub fn pop(&mut self) -> Result<Disk, TowerError> {
        self.disks
            .pop()
            .ok_or(TowerError::Empty { index: self.index })
    }

    /// Whether the tower holds no disks
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Number of disks on the tower
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// Disks from bottom to top
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Disk sizes from bottom to top
    pub fn sizes(&self) -> Vec<u32> {
        self.disks.iter().map(Disk::size).collect()
    }

    /// Whether sizes strictly decrease from bottom to top
    pub fn is_ordered(&self) -> bool {
        self.disks.windows(2).all(|pair| pair[1].fits_on(&pair[0]))
    }

    pub(crate) fn clear(&mut self) {
        self.disks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disk(size: u32) -> Disk {
        Disk::new(size).unwrap()
    }

    #[test]
    fn new_tower_is_empty() {
        let tower = Tower::new(1);
        assert!(tower.is_empty());
        assert_eq!(tower.len(), 0);
        assert_eq!(tower.index(), 1);
        assert!(tower.top_disk().is_none());
    }

    #[test]
    fn empty_tower_reports_sentinel() {
        let tower = Tower::new(0);
        assert_eq!(tower.top_disk_size(), EMPTY_TOWER_SENTINEL);
        assert!(disk(u32::MAX - 1).size() < tower.top_disk_size());
    }

    #[test]
    fn push_then_pop_returns_top() {
        let mut tower = Tower::new(0);
        tower.push(disk(3));
        tower.push(disk(1));

        assert_eq!(tower.top_disk_size(), 1);
        assert_eq!(tower.pop(), Ok(disk(1)));
        assert_eq!(tower.top_disk_size(), 3);
        assert_eq!(tower.len(), 1);
    }

    #[test]
    fn pop_on_empty_tower_fails() {
        let mut tower = Tower::new(2);
        assert_eq!(tower.pop(), Err(TowerError::Empty { index: 2 }));
    }

    #[test]
    fn empty_error_names_the_peg() {
        let err = TowerError::Empty { index: 1 };
        assert_eq!(err.to_string(), "Tower B is empty");
    }

    #[test]
    fn sizes_are_bottom_to_top() {
        let mut tower = Tower::new(0);
        for size in [5, 3, 2] {
            tower.push(disk(size));
        }
        assert_eq!(tower.sizes(), vec![5, 3, 2]);
        assert!(tower.is_ordered());
    }

    #[test]
    fn peg_labels() {
        assert_eq!(peg_label(0), 'A');
        assert_eq!(peg_label(1), 'B');
        assert_eq!(peg_label(2), 'C');
        assert_eq!(peg_label(3), '?');
    }

    #[test]
    fn clear_empties_tower() {
        let mut tower = Tower::new(0);
        tower.push(disk(2));
        tower.clear();
        assert!(tower.is_empty());
    }
}
