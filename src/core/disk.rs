//! Disk tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// A sized token stacked on a tower.
///
/// The size never changes once a disk is created. Smaller disks may rest
/// only on larger disks or on an empty tower.
///
/// # Example
///
/// ```rust
/// use hanoi::core::Disk;
///
/// let disk = Disk::new(3).unwrap();
/// assert_eq!(disk.size(), 3);
/// assert!(Disk::new(0).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Disk {
    size: NonZeroU32,
}

impl Disk {
    /// Create a disk of the given size. Returns `None` for size zero.
    pub fn new(size: u32) -> Option<Self> {
        NonZeroU32::new(size).map(|size| Self { size })
    }

    /// Size of the disk (always positive)
    pub fn size(&self) -> u32 {
        self.size.get()
    }

    /// Whether this disk may rest on top of `other`
    pub fn fits_on(&self, other: &Disk) -> bool {
        self.size < other.size
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Disk {}", self.size)
    }
}
