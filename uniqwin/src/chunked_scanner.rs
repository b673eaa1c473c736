//! Chunked scanner for input that arrives piece by piece
//!
//! This module runs the sliding-window scan over a finite byte input that is
//! delivered as a series of chunks. Chunks may be split anywhere, including in
//! the middle of a multi-byte UTF-8 character, without changing the result.

use hashbrown::HashSet;
use uniqwin_core::format::constants::MAX_UTF8_CHAR_LEN;
use uniqwin_core::{
    decode_partial, split_utf8, ByteSet, ChunkProcessor, Encoding, SlidingWindow, WindowError,
    WindowSpan,
};

/// Configuration for chunked scanning
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScanConfig {
    /// How chunk bytes map to window items
    pub encoding: Encoding,
    /// Window items to reserve room for up front
    pub window_capacity: usize,
}

impl ScanConfig {
    /// Config for UTF-8 text
    pub fn utf8() -> Self {
        Self::default()
    }

    /// Config for raw bytes
    pub fn bytes() -> Self {
        Self::default().with_encoding(Encoding::Bytes)
    }

    /// Set the input encoding
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set how many window items to reserve room for
    pub fn with_window_capacity(mut self, window_capacity: usize) -> Self {
        self.window_capacity = window_capacity;
        self
    }

    /// Get the input encoding
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Capacity actually worth reserving, given the encoding's alphabet
    pub fn effective_capacity(&self) -> usize {
        match self.encoding.alphabet_bound() {
            Some(bound) => self.window_capacity.min(bound),
            None => self.window_capacity,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            encoding: Encoding::Utf8,
            window_capacity: 64,
        }
    }
}

/// Result of a finished chunked scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanSummary {
    /// Leftmost longest repeat-free window, in items
    pub longest: WindowSpan,
    /// Number of items (chars or bytes) scanned
    pub items: usize,
    /// Number of input bytes consumed
    pub bytes: usize,
}

#[derive(Debug, Clone)]
enum ScanState {
    Text(SlidingWindow<char, HashSet<char>>),
    Bytes(SlidingWindow<u8, ByteSet>),
}

impl ScanState {
    fn new(config: &ScanConfig) -> Self {
        let capacity = config.effective_capacity();
        match config.encoding {
            Encoding::Utf8 => ScanState::Text(SlidingWindow::with_capacity(
                HashSet::with_capacity(capacity),
                capacity,
            )),
            Encoding::Bytes => {
                ScanState::Bytes(SlidingWindow::with_capacity(ByteSet::new(), capacity))
            }
        }
    }

    fn best(&self) -> WindowSpan {
        match self {
            ScanState::Text(window) => window.best(),
            ScanState::Bytes(window) => window.best(),
        }
    }

    fn consumed(&self) -> usize {
        match self {
            ScanState::Text(window) => window.consumed(),
            ScanState::Bytes(window) => window.consumed(),
        }
    }
}

/// Leading bytes of a character cut off at the end of a chunk
#[derive(Debug, Clone, Default)]
struct PendingChar {
    buf: [u8; MAX_UTF8_CHAR_LEN],
    len: usize,
    /// Absolute offset of `buf[0]`
    start: usize,
}

impl PendingChar {
    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn stash(&mut self, bytes: &[u8], start: usize) {
        self.buf[..bytes.len()].copy_from_slice(bytes);
        self.len = bytes.len();
        self.start = start;
    }

    /// Move bytes from the front of `input` until the character completes
    fn complete<'a>(
        &mut self,
        mut input: &'a [u8],
    ) -> Result<(Option<char>, &'a [u8]), WindowError> {
        while let Some((&byte, rest)) = input.split_first() {
            if self.len == self.buf.len() {
                return Err(WindowError::InvalidUtf8 { offset: self.start });
            }
            self.buf[self.len] = byte;
            self.len += 1;
            input = rest;

            if let Some(ch) = decode_partial(&self.buf[..self.len], self.start)? {
                self.len = 0;
                return Ok((Some(ch), input));
            }
        }
        Ok((None, input))
    }
}

/// Sliding-window scanner fed with byte chunks
///
/// ```
/// use uniqwin::{ChunkProcessor, ChunkedScanner, ScanConfig};
///
/// let mut scanner = ChunkedScanner::new(ScanConfig::utf8());
/// scanner.process_chunk(b"abca").unwrap();
/// scanner.process_chunk(b"bcbb").unwrap();
/// let summary = scanner.finalize().unwrap();
/// assert_eq!(summary.longest.len, 3);
/// ```
#[derive(Debug, Clone)]
pub struct ChunkedScanner {
    config: ScanConfig,
    state: ScanState,
    pending: PendingChar,
    /// Bytes accepted so far
    bytes: usize,
    /// Chunks accepted so far
    chunks: usize,
    failed: Option<WindowError>,
}

impl ChunkedScanner {
    /// Create a new scanner
    pub fn new(config: ScanConfig) -> Self {
        let state = ScanState::new(&config);
        Self {
            config,
            state,
            pending: PendingChar::default(),
            bytes: 0,
            chunks: 0,
            failed: None,
        }
    }

    /// Scan all chunks with a fresh scanner
    pub fn scan_chunks<'a, I>(config: ScanConfig, chunks: I) -> Result<ScanSummary, WindowError>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        Self::new(config).process_all(chunks)
    }

    /// Get the scan configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Longest window seen in the chunks processed so far
    pub fn best_so_far(&self) -> WindowSpan {
        self.state.best()
    }

    /// Number of bytes consumed so far
    pub fn bytes_scanned(&self) -> usize {
        self.bytes
    }

    /// The error that stopped this scanner, if any
    pub fn error(&self) -> Option<WindowError> {
        self.failed
    }

    fn scan_text(
        window: &mut SlidingWindow<char, HashSet<char>>,
        pending: &mut PendingChar,
        chunk: &[u8],
        offset: usize,
    ) -> Result<(), WindowError> {
        let mut rest = chunk;
        let mut completed = None;

        if !pending.is_empty() {
            let (ch, tail) = pending.complete(rest)?;
            if ch.is_none() {
                return Ok(());
            }
            completed = ch;
            rest = tail;
        }

        // Validate the whole chunk before any of it reaches the window
        let rest_offset = offset + (chunk.len() - rest.len());
        let split = split_utf8(rest, rest_offset)?;

        if let Some(ch) = completed {
            window.push(ch);
        }
        window.extend(split.text.chars());

        if !split.remainder.is_empty() {
            pending.stash(split.remainder, rest_offset + split.text.len());
        }
        Ok(())
    }
}

impl ChunkProcessor for ChunkedScanner {
    type Output = ScanSummary;
    type Error = WindowError;

    fn process_chunk(&mut self, chunk: &[u8]) -> Result<(), WindowError> {
        if let Some(err) = self.failed {
            return Err(err);
        }

        tracing::trace!(chunk = self.chunks, len = chunk.len(), "scanning chunk");

        let result = match &mut self.state {
            ScanState::Bytes(window) => {
                window.extend(chunk.iter().copied());
                Ok(())
            }
            ScanState::Text(window) => {
                Self::scan_text(window, &mut self.pending, chunk, self.bytes)
            }
        };

        if let Err(err) = result {
            tracing::debug!(offset = err.offset(), chunk = self.chunks, "Scan failed: {}", err);
            self.failed = Some(err);
            return Err(err);
        }

        self.bytes += chunk.len();
        self.chunks += 1;
        Ok(())
    }

    fn finalize(self) -> Result<ScanSummary, WindowError> {
        if let Some(err) = self.failed {
            return Err(err);
        }

        if !self.pending.is_empty() {
            let err = WindowError::TruncatedUtf8 {
                offset: self.pending.start,
            };
            tracing::debug!(offset = err.offset(), "Scan failed: {}", err);
            return Err(err);
        }

        let summary = ScanSummary {
            longest: self.state.best(),
            items: self.state.consumed(),
            bytes: self.bytes,
        };

        tracing::debug!(
            chunks = self.chunks,
            bytes = summary.bytes,
            items = summary.items,
            longest = summary.longest.len,
            "Scan finished"
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use uniqwin_core::{longest_unique_bytes_length, longest_unique_substring_length};

    fn scan_text_in(chunks: &[&[u8]]) -> Result<ScanSummary, WindowError> {
        ChunkedScanner::scan_chunks(ScanConfig::utf8(), chunks.iter().copied())
    }

    #[test]
    fn test_single_chunk_matches_one_shot() {
        for text in ["", "a", "abcabcbb", "bbbbb", "pwwkew"] {
            let summary = scan_text_in(&[text.as_bytes()]).unwrap();
            assert_eq!(summary.longest.len, longest_unique_substring_length(text));
            assert_eq!(summary.items, text.chars().count());
            assert_eq!(summary.bytes, text.len());
        }
    }

    #[test]
    fn test_split_inside_multibyte_char() {
        // "€" is three bytes; split it across three chunks
        let text = "a€b€c";
        let bytes = text.as_bytes();
        let summary = scan_text_in(&[&bytes[..2], &bytes[2..3], &bytes[3..]]).unwrap();

        assert_eq!(summary.longest, WindowSpan::new(0, 3));
        assert_eq!(summary.items, 5);
        assert_eq!(summary.bytes, bytes.len());
    }

    #[test]
    fn test_empty_chunks_are_ignored() {
        let summary = scan_text_in(&[&b""[..], &b"ab"[..], &b""[..], &b"a"[..]]).unwrap();
        assert_eq!(summary.longest, WindowSpan::new(0, 2));
    }

    #[test]
    fn test_invalid_utf8_reports_absolute_offset() {
        let mut scanner = ChunkedScanner::new(ScanConfig::utf8());
        scanner.process_chunk(b"hello").unwrap();

        let err = scanner.process_chunk(b"wo\xFFrld").unwrap_err();
        assert_eq!(err, WindowError::InvalidUtf8 { offset: 7 });
        assert_eq!(scanner.error(), Some(err));
        assert_eq!(scanner.bytes_scanned(), 5);

        // Stays failed
        assert_eq!(scanner.process_chunk(b"ok"), Err(err));
        assert_eq!(scanner.finalize(), Err(err));
    }

    #[test]
    fn test_invalid_continuation_across_chunks() {
        let err = scan_text_in(&[&b"ab\xE2"[..], &b"\x41"[..]]).unwrap_err();
        assert_eq!(err, WindowError::InvalidUtf8 { offset: 2 });
    }

    #[test]
    fn test_failed_chunk_leaves_window_untouched() {
        // "é" is C3 A9; its second byte opens a chunk that is invalid later on
        let mut scanner = ChunkedScanner::new(ScanConfig::utf8());
        scanner.process_chunk(b"ab\xC3").unwrap();
        assert_eq!(scanner.best_so_far(), WindowSpan::new(0, 2));

        let err = scanner.process_chunk(b"\xA9c\xFF").unwrap_err();
        assert_eq!(err, WindowError::InvalidUtf8 { offset: 5 });
        assert_eq!(scanner.best_so_far(), WindowSpan::new(0, 2));
        assert_eq!(scanner.bytes_scanned(), 3);
    }

    #[test]
    fn test_random_invalid_bytes_report_std_offsets() {
        let fragments: [&[u8]; 14] = [
            b"a",
            b"b",
            "é".as_bytes(),
            "€".as_bytes(),
            "𝄞".as_bytes(),
            b"\x80",
            b"\xBF",
            b"\xFF",
            b"\xED\xA0\x80",
            b"\xF4\x90\x80\x80",
            b"\xC0\xAF",
            b"\xE2\x82",
            b"\xF0\x9F",
            b"\xC3",
        ];
        let mut rng = StdRng::seed_from_u64(0x0bad_f00d);

        for _ in 0..2_000 {
            let mut bytes = Vec::new();
            for _ in 0..rng.gen_range(0..12) {
                // Mostly valid text so errors land at varied offsets
                let index = if rng.gen_bool(0.8) {
                    rng.gen_range(0..5)
                } else {
                    rng.gen_range(5..fragments.len())
                };
                bytes.extend_from_slice(fragments[index]);
            }

            let mut chunks = Vec::new();
            let mut start = 0;
            while start < bytes.len() {
                let end = rng.gen_range(start + 1..=bytes.len());
                chunks.push(&bytes[start..end]);
                start = end;
            }

            let expected = match std::str::from_utf8(&bytes) {
                Ok(text) => Ok(longest_unique_substring_length(text)),
                Err(err) if err.error_len().is_some() => Err(WindowError::InvalidUtf8 {
                    offset: err.valid_up_to(),
                }),
                Err(err) => Err(WindowError::TruncatedUtf8 {
                    offset: err.valid_up_to(),
                }),
            };

            let result = ChunkedScanner::scan_chunks(ScanConfig::utf8(), chunks.iter().copied())
                .map(|summary| summary.longest.len);
            assert_eq!(result, expected, "mismatch for {bytes:x?} split as {chunks:x?}");
        }
    }

    #[test]
    fn test_truncated_utf8_at_finalize() {
        let bytes = "xy€".as_bytes();
        let err = scan_text_in(&[&bytes[..3]]).unwrap_err();
        assert_eq!(err, WindowError::TruncatedUtf8 { offset: 2 });
    }

    #[test]
    fn test_bytes_encoding_never_fails() {
        let summary =
            ChunkedScanner::scan_chunks(ScanConfig::bytes(), [&b"\xFFab"[..], &b"\xFF\xE2"[..]])
                .unwrap();
        assert_eq!(summary.longest, WindowSpan::new(1, 4));
        assert_eq!(summary.items, 5);
    }

    #[test]
    fn test_best_so_far() {
        let mut scanner = ChunkedScanner::new(ScanConfig::utf8());
        scanner.process_chunk(b"abc").unwrap();
        assert_eq!(scanner.best_so_far().len, 3);
        scanner.process_chunk(b"defa").unwrap();
        assert_eq!(scanner.best_so_far().len, 6);
    }

    #[test]
    fn test_random_splits_match_one_shot() {
        let alphabet = ['a', 'b', 'c', 'é', '€', '𝄞', '日'];
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let len = rng.gen_range(0..40);
            let text: String = (0..len)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect();
            let bytes = text.as_bytes();

            let mut chunks = Vec::new();
            let mut start = 0;
            while start < bytes.len() {
                let end = rng.gen_range(start + 1..=bytes.len());
                chunks.push(&bytes[start..end]);
                start = end;
            }

            let summary = ChunkedScanner::scan_chunks(ScanConfig::utf8(), chunks.iter().copied())
                .unwrap();
            assert_eq!(summary.longest.len, longest_unique_substring_length(&text));

            let summary = ChunkedScanner::scan_chunks(ScanConfig::bytes(), chunks.iter().copied())
                .unwrap();
            assert_eq!(summary.longest.len, longest_unique_bytes_length(bytes));
        }
    }

    #[test]
    fn test_config_builder() {
        let config = ScanConfig::default()
            .with_encoding(Encoding::Bytes)
            .with_window_capacity(1024);
        assert_eq!(config.encoding(), Encoding::Bytes);
        assert_eq!(config.effective_capacity(), 256);
        assert_eq!(ScanConfig::utf8().with_window_capacity(1024).effective_capacity(), 1024);

        let scanner = ChunkedScanner::new(config.clone());
        assert_eq!(scanner.config(), &config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let config: ScanConfig = serde_json::from_str(r#"{"encoding":"bytes"}"#).unwrap();
        assert_eq!(config, ScanConfig::bytes());

        let config: ScanConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ScanConfig::default());
    }
}
