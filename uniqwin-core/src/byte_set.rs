//! Compact exact byte set for no_std environments
//!
//! This module provides a fixed-size membership set over all 256 byte values.
//! Unlike a hash set it never allocates, which makes it the window set of
//! choice for scanning raw bytes.

/// Exact set of `u8` values backed by a 256-bit array
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteSet {
    /// Bit array (32 bytes = 256 bits, one per byte value)
    bits: [u8; 32],
    /// Number of bits currently set
    len: u16,
}

impl ByteSet {
    /// Create an empty byte set
    pub const fn new() -> Self {
        Self {
            bits: [0; 32],
            len: 0,
        }
    }

    /// Create a byte set holding every value in `bytes`
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut set = Self::new();
        for &byte in bytes {
            set.insert(byte);
        }
        set
    }

    /// Insert a byte, returning `true` if it was not already present
    pub fn insert(&mut self, value: u8) -> bool {
        let (byte_index, mask) = Self::locate(value);
        if self.bits[byte_index] & mask != 0 {
            return false;
        }

        self.bits[byte_index] |= mask;
        self.len += 1;
        true
    }

    /// Remove a byte, returning `true` if it was present
    pub fn remove(&mut self, value: u8) -> bool {
        let (byte_index, mask) = Self::locate(value);
        if self.bits[byte_index] & mask == 0 {
            return false;
        }

        self.bits[byte_index] &= !mask;
        self.len -= 1;
        true
    }

    /// Check if a byte is in the set (exact, no false positives)
    pub fn contains(&self, value: u8) -> bool {
        let (byte_index, mask) = Self::locate(value);
        self.bits[byte_index] & mask != 0
    }

    /// Clear all bits in the set
    pub fn clear(&mut self) {
        self.bits.fill(0);
        self.len = 0;
    }

    /// Get the number of distinct bytes in the set
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Check whether the set holds no bytes
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the number of bits in the set
    pub const fn bit_count() -> usize {
        256
    }

    /// Get the bits array
    pub fn bits(&self) -> &[u8; 32] {
        &self.bits
    }

    /// Create a byte set from a raw bit array
    pub fn from_bits(bits: [u8; 32]) -> Self {
        let len = bits.iter().map(|byte| byte.count_ones() as u16).sum();
        Self { bits, len }
    }

    const fn locate(value: u8) -> (usize, u8) {
        ((value / 8) as usize, 1 << (value % 8))
    }
}
