//! Typed lengths and the integer unit arithmetic used by the text style cascade.
//!
//! Lengths are stored as a small signed magnitude plus a [`SizeUnit`]. Relative
//! units are expressed in hundredths (`Em100` is "hundredths of an em") so that
//! conversion stays in truncating integer arithmetic end to end.

#![forbid(unsafe_code)]

pub mod dimensions;
pub mod metrics;

pub use dimensions::{Length, SizeUnit, compute_length, scale_percent};
pub use metrics::TextMetrics;
