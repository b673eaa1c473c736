//! Helpers for locating the repeat-free substring inside a `&str`

use std::ops::Range;

use hashbrown::HashSet;
use uniqwin_core::{longest_unique_span_with, WindowSpan};

/// Leftmost longest run of distinct characters, in char indices
pub fn longest_unique_span(s: &str) -> WindowSpan {
    let mut window = HashSet::new();
    longest_unique_span_with(s.chars(), &mut window)
}

/// Convert a span in char indices to a byte range into `s`
///
/// Indices past the end of `s` clamp to `s.len()`.
pub fn char_span_to_byte_range(s: &str, span: WindowSpan) -> Range<usize> {
    let mut boundaries = s
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(s.len()));

    let start = boundaries.nth(span.start).unwrap_or(s.len());
    let end = if span.len == 0 {
        start
    } else {
        boundaries.nth(span.len - 1).unwrap_or(s.len())
    };
    start..end
}

/// The leftmost longest substring of `s` without repeating characters
///
/// ```
/// assert_eq!(uniqwin::longest_unique_substring("abcabcbb"), "abc");
/// assert_eq!(uniqwin::longest_unique_substring("pwwkew"), "wke");
/// ```
pub fn longest_unique_substring(s: &str) -> &str {
    let span = longest_unique_span(s);
    &s[char_span_to_byte_range(s, span)]
}
