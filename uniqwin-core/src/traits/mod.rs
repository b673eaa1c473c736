//! Abstract interfaces for window scanning
//!
//! This module defines the trait abstractions shared by the one-shot scan and
//! the chunked scanner. Concrete sets live next to the traits they implement.

pub mod processor;
pub mod window_set;

pub use processor::ChunkProcessor;
pub use window_set::WindowSet;
