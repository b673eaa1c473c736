//! Plain data definitions shared by every scan
//!
//! This module contains the result and configuration types produced and
//! consumed by the scans. No scanning logic lives here.

pub mod constants;
pub mod encoding;
pub mod span;

pub use encoding::Encoding;
pub use span::WindowSpan;
