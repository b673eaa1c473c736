//! uniqwin - longest substring without repeating characters
//!
//! This library finds the longest contiguous run of distinct items in text,
//! raw bytes or any hashable sequence, using a single O(n) sliding-window
//! pass.
//!
//! ## Architecture
//!
//! uniqwin follows a core/implementation separation:
//!
//! - **uniqwin-core**: The scan, window-set trait, data types and UTF-8
//!   validation (`no_std`, no I/O)
//! - **uniqwin**: Std-level helpers built on the core: substring extraction
//!   and a chunked scanner for input delivered in pieces
//!
//! ## Quick Start
//!
//! ```rust
//! use uniqwin::{longest_unique_substring, longest_unique_substring_length};
//!
//! assert_eq!(longest_unique_substring_length("abcabcbb"), 3);
//! assert_eq!(longest_unique_substring("pwwkew"), "wke");
//! ```
//!
//! ## Features
//!
//! - **Any alphabet**: chars are Unicode scalar values, not bytes
//! - **Allocation-free bytes**: a 256-bit set backs byte scanning
//! - **Chunked input**: chunks may split UTF-8 characters anywhere
//! - **serde**: derives for spans, encodings and scan configs

// Re-export core abstractions and data types
pub use uniqwin_core::{
    // Scans
    longest_unique_bytes_length, longest_unique_length, longest_unique_span_with,
    longest_unique_substring_length,
    // Window sets
    ByteSet, SlidingWindow, WindowSet,
    // Data types
    Encoding, WindowSpan,
    // Chunk processing
    ChunkProcessor,
    // Error handling
    Result, WindowError,
};

pub mod chunked_scanner;
pub mod text;

pub use chunked_scanner::{ChunkedScanner, ScanConfig, ScanSummary};
pub use text::{char_span_to_byte_range, longest_unique_span, longest_unique_substring};
