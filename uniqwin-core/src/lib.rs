#![no_std]

//! uniqwin core - longest run of items without repeats
//!
//! This crate provides the sliding-window scan, the window-set abstraction
//! it runs on and the pure validation helpers needed to feed it raw bytes.
//! Nothing here performs I/O.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod byte_set;
pub mod error;
pub mod format;
pub mod scan;
pub mod traits;
pub mod validation;
#[cfg(feature = "alloc")]
pub mod window;

pub use byte_set::ByteSet;
pub use error::*;
pub use format::*;
pub use scan::{
    longest_unique_bytes_length, longest_unique_length, longest_unique_span_with,
    longest_unique_substring_length,
};
pub use traits::*;
pub use validation::*;
#[cfg(feature = "alloc")]
pub use window::SlidingWindow;
