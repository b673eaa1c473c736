//! Error types for byte-oriented window scanning

/// Errors that can occur while decoding scanner input
///
/// The one-shot scans over `&str`, `&[u8]` and item iterators are total and
/// never produce these. Only surfaces that accept raw bytes as text do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    /// Byte sequence that can never become valid UTF-8, at an absolute offset
    InvalidUtf8 { offset: usize },
    /// Input ended in the middle of a multi-byte character
    TruncatedUtf8 { offset: usize },
}

impl WindowError {
    /// Absolute byte offset at which the problem starts
    pub const fn offset(&self) -> usize {
        match self {
            WindowError::InvalidUtf8 { offset } | WindowError::TruncatedUtf8 { offset } => *offset,
        }
    }
}

impl core::fmt::Display for WindowError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WindowError::InvalidUtf8 { offset } => {
                write!(f, "Invalid UTF-8 sequence at byte {offset}")
            }
            WindowError::TruncatedUtf8 { offset } => {
                write!(f, "Input ends inside a UTF-8 character starting at byte {offset}")
            }
        }
    }
}

impl core::error::Error for WindowError {}

/// Result type for window scanning operations
pub type Result<T> = core::result::Result<T, WindowError>;
