//! Transcript parsing: format detection, segment splitting and header
//! timestamps.
//!
//! These are the low-level stages used by [`Preprocessor`](crate::Preprocessor).
//! Most callers want [`preprocess`](crate::preprocess) instead.

pub mod pattern;
pub mod segment;
pub mod timestamp;

pub use pattern::{TimeFormat, detect_format, is_media_omitted, normalize_spaces};
pub use segment::{RawSegment, split_segments};
pub use timestamp::parse_timestamp;
