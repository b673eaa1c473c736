//! One-shot sliding-window scan
//!
//! The window `[left, right]` grows one item at a time. When the incoming item
//! is already inside, items are evicted from the left until it is not. `left`
//! never moves backwards, so every item enters and leaves the window at most
//! once and the whole scan is O(n).

use core::hash::Hash;

use crate::byte_set::ByteSet;
use crate::format::WindowSpan;
use crate::traits::WindowSet;

/// Find the leftmost longest window of distinct items
///
/// `window` is cleared before scanning and left holding the final window's
/// items afterwards. The input iterator is cloned once: the clone trails the
/// scan and yields the items to evict, so the input is never buffered or
/// indexed.
pub fn longest_unique_span_with<I, S>(items: I, window: &mut S) -> WindowSpan
where
    I: IntoIterator,
    I::IntoIter: Clone,
    S: WindowSet<I::Item>,
{
    let leading = items.into_iter();
    let mut trailing = leading.clone();
    let mut left = 0;
    let mut best = WindowSpan::EMPTY;

    window.clear();

    for (right, item) in leading.enumerate() {
        while window.contains(&item) {
            // The trailing iterator only ever yields items already inserted,
            // so it cannot run dry before `item` is evicted.
            let Some(evicted) = trailing.next() else {
                break;
            };
            window.remove(&evicted);
            left += 1;
        }

        window.insert(item);

        let len = right - left + 1;
        if len > best.len {
            best = WindowSpan::new(left, len);
        }
    }

    best
}

/// Length of the longest substring of `s` without repeating characters
///
/// Characters are Unicode scalar values. Returns `0` for an empty string.
///
/// ```
/// use uniqwin_core::longest_unique_substring_length;
///
/// assert_eq!(longest_unique_substring_length("abcabcbb"), 3);
/// assert_eq!(longest_unique_substring_length("pwwkew"), 3);
/// assert_eq!(longest_unique_substring_length(""), 0);
/// ```
pub fn longest_unique_substring_length(s: &str) -> usize {
    let mut window = hashbrown::HashSet::new();
    longest_unique_span_with(s.chars(), &mut window).len
}

/// Length of the longest run of distinct bytes
///
/// Uses a fixed [`ByteSet`], so no memory is allocated.
pub fn longest_unique_bytes_length(bytes: &[u8]) -> usize {
    let mut window = ByteSet::new();
    longest_unique_span_with(bytes.iter().copied(), &mut window).len
}

/// Length of the longest run of distinct items for any hashable item type
pub fn longest_unique_length<I>(items: I) -> usize
where
    I: IntoIterator,
    I::IntoIter: Clone,
    I::Item: Eq + Hash,
{
    let mut window = hashbrown::HashSet::new();
    longest_unique_span_with(items, &mut window).len
}
