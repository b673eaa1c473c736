//! UTF-8 validation across chunk boundaries
//!
//! A chunk may end part way through a multi-byte character. These helpers
//! separate the valid text of a chunk from such an unfinished tail, and
//! finish a tail once the next chunk supplies the missing bytes.

use crate::format::constants::MAX_PENDING_UTF8;
use crate::WindowError;

/// A chunk split into its valid text and an unfinished trailing character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Split<'a> {
    /// Longest valid UTF-8 prefix of the chunk
    pub text: &'a str,
    /// Start of a character that the chunk cut off (at most 3 bytes)
    pub remainder: &'a [u8],
}

/// Split `bytes` into valid text and an incomplete trailing character
///
/// `offset` is the absolute position of `bytes[0]` in the whole input and is
/// only used to report where an invalid sequence starts.
pub fn split_utf8(bytes: &[u8], offset: usize) -> Result<Utf8Split<'_>, WindowError> {
    match core::str::from_utf8(bytes) {
        Ok(text) => Ok(Utf8Split {
            text,
            remainder: &[],
        }),
        Err(err) if err.error_len().is_some() => Err(WindowError::InvalidUtf8 {
            offset: offset + err.valid_up_to(),
        }),
        Err(err) => {
            let (valid, remainder) = bytes.split_at(err.valid_up_to());
            debug_assert!(remainder.len() <= MAX_PENDING_UTF8);
            let text = core::str::from_utf8(valid).map_err(|err| WindowError::InvalidUtf8 {
                offset: offset + err.valid_up_to(),
            })?;
            Ok(Utf8Split { text, remainder })
        }
    }
}

/// Try to finish a single character from the bytes collected so far
///
/// `buf` holds the leading bytes of at most one character. Returns
/// `Some(char)` once it is complete, `None` while more bytes are needed, and
/// an error as soon as the bytes can no longer form a character.
pub fn decode_partial(buf: &[u8], offset: usize) -> Result<Option<char>, WindowError> {
    match core::str::from_utf8(buf) {
        Ok(text) => Ok(text.chars().next()),
        Err(err) if err.error_len().is_some() => Err(WindowError::InvalidUtf8 {
            offset: offset + err.valid_up_to(),
        }),
        Err(_) => Ok(None),
    }
}
