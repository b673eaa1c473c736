//! Location of a repeat-free window inside a sequence

use core::ops::Range;

/// Position of a window, measured in items (chars for text, bytes for bytes)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowSpan {
    /// Index of the first item in the window
    pub start: usize,
    /// Number of items in the window
    pub len: usize,
}

impl WindowSpan {
    /// The span reported for empty input
    pub const EMPTY: WindowSpan = WindowSpan { start: 0, len: 0 };

    /// Create a new span
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Index one past the last item
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Item range covered by this span
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Check whether the span covers no items
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if an item index falls within this span
    pub const fn contains_index(&self, index: usize) -> bool {
        index >= self.start && index < self.end()
    }
}
