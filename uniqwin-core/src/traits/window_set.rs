//! Membership set used to hold the items of the current window
//!
//! The sliding-window scan only needs average O(1) insert, remove and
//! membership checks. Any container offering those can back a scan.

use core::hash::{BuildHasher, Hash};

use crate::byte_set::ByteSet;

/// Set of the distinct items currently inside a window
pub trait WindowSet<T> {
    /// Check whether `item` is in the window
    fn contains(&self, item: &T) -> bool;

    /// Add `item`, returning `true` if it was not already present
    fn insert(&mut self, item: T) -> bool;

    /// Drop `item`, returning `true` if it was present
    fn remove(&mut self, item: &T) -> bool;

    /// Empty the set, keeping any allocation
    fn clear(&mut self);

    /// Number of distinct items held
    fn len(&self) -> usize;

    /// Check whether the set is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, H> WindowSet<T> for hashbrown::HashSet<T, H>
where
    T: Eq + Hash,
    H: BuildHasher,
{
    fn contains(&self, item: &T) -> bool {
        hashbrown::HashSet::contains(self, item)
    }

    fn insert(&mut self, item: T) -> bool {
        hashbrown::HashSet::insert(self, item)
    }

    fn remove(&mut self, item: &T) -> bool {
        hashbrown::HashSet::remove(self, item)
    }

    fn clear(&mut self) {
        hashbrown::HashSet::clear(self)
    }

    fn len(&self) -> usize {
        hashbrown::HashSet::len(self)
    }
}

impl WindowSet<u8> for ByteSet {
    fn contains(&self, item: &u8) -> bool {
        ByteSet::contains(self, *item)
    }

    fn insert(&mut self, item: u8) -> bool {
        ByteSet::insert(self, item)
    }

    fn remove(&mut self, item: &u8) -> bool {
        ByteSet::remove(self, *item)
    }

    fn clear(&mut self) {
        ByteSet::clear(self)
    }

    fn len(&self) -> usize {
        ByteSet::len(self)
    }
}
