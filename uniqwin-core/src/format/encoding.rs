//! How raw bytes map to window items

/// Interpretation of byte input fed to a chunked scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Encoding {
    /// Items are Unicode scalar values decoded from UTF-8
    #[default]
    Utf8,
    /// Items are the raw bytes themselves
    Bytes,
}

impl Encoding {
    /// Largest possible window for this encoding, if the alphabet is bounded
    pub const fn alphabet_bound(&self) -> Option<usize> {
        match self {
            Encoding::Utf8 => None,
            Encoding::Bytes => Some(super::constants::BYTE_ALPHABET_SIZE),
        }
    }
}
