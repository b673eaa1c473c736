//! Push-based sliding window (requires alloc)
//!
//! Keeps the items of the current window in arrival order so the left edge
//! can be evicted without access to the original input. This is what lets a
//! scan continue across chunk boundaries.

use alloc::collections::VecDeque;

use crate::format::WindowSpan;
use crate::traits::WindowSet;

/// Sliding window that accepts one item at a time
#[derive(Debug, Clone)]
pub struct SlidingWindow<T, S> {
    /// Items of the current window, oldest first
    items: VecDeque<T>,
    /// Membership set mirroring `items`
    set: S,
    /// Index of the oldest item in the current window
    left: usize,
    /// Number of items pushed since creation or the last reset
    consumed: usize,
    /// Leftmost longest window seen so far
    best: WindowSpan,
}

impl<T, S> SlidingWindow<T, S>
where
    T: Clone,
    S: WindowSet<T>,
{
    /// Create a window backed by the given (cleared) set
    pub fn new(mut set: S) -> Self {
        set.clear();
        Self {
            items: VecDeque::new(),
            set,
            left: 0,
            consumed: 0,
            best: WindowSpan::EMPTY,
        }
    }

    /// Create a window with room for `capacity` items before reallocating
    pub fn with_capacity(set: S, capacity: usize) -> Self {
        let mut window = Self::new(set);
        window.items.reserve(capacity);
        window
    }

    /// Append the next item, evicting from the left until it is unique
    pub fn push(&mut self, item: T) {
        while self.set.contains(&item) {
            let Some(evicted) = self.items.pop_front() else {
                break;
            };
            self.set.remove(&evicted);
            self.left += 1;
        }

        self.set.insert(item.clone());
        self.items.push_back(item);
        self.consumed += 1;

        if self.items.len() > self.best.len {
            self.best = WindowSpan::new(self.left, self.items.len());
        }
    }

    /// Push every item of an iterator in order
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.push(item);
        }
    }

    /// Leftmost longest window seen so far
    pub fn best(&self) -> WindowSpan {
        self.best
    }

    /// The window ending at the most recently pushed item
    pub fn current(&self) -> WindowSpan {
        WindowSpan::new(self.left, self.items.len())
    }

    /// Length of the current window
    pub fn current_len(&self) -> usize {
        self.items.len()
    }

    /// Number of items pushed so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Items of the current window, oldest first
    pub fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    /// Forget everything, keeping allocations
    pub fn reset(&mut self) {
        self.items.clear();
        self.set.clear();
        self.left = 0;
        self.consumed = 0;
        self.best = WindowSpan::EMPTY;
    }
}
