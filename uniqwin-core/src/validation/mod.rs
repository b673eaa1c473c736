//! Input validation utilities
//!
//! This module contains pure validation functions with no I/O dependencies.
//! They let byte input be checked piecewise as it arrives.

pub mod utf8;

pub use utf8::{decode_partial, split_utf8, Utf8Split};
