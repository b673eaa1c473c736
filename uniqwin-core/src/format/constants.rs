//! Alphabet and encoding constants

/// Number of distinct values a byte-oriented window can hold
pub const BYTE_ALPHABET_SIZE: usize = 256;

/// Longest encoding of a single `char` in UTF-8
pub const MAX_UTF8_CHAR_LEN: usize = 4;

/// Most bytes of an unfinished character a chunk can leave behind
pub const MAX_PENDING_UTF8: usize = MAX_UTF8_CHAR_LEN - 1;
