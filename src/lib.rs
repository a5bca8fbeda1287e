//! # Chatstat
//!
//! Turns an exported chat transcript into a per-message table ready for
//! activity statistics: messages per user, per hour bucket, per weekday, and
//! so on.
//!
//! ## Overview
//!
//! Transcripts look like this (12-hour or 24-hour clock):
//!
//! ```text
//! 12/5/23, 10:30 PM - Alice: Hello there
//! 12/5/23, 10:31 PM - Bob: Hi Alice
//! 12/5/23, 10:32 PM - Bob added Carol
//! ```
//!
//! The pipeline detects the clock convention, splits the text on message
//! headers, parses each header's timestamp, drops media placeholders, splits
//! `sender: message`, and derives calendar fields for every row.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let table = preprocess(
//!         "12/5/23, 10:30 PM - Alice: Hello there\n12/5/23, 10:31 PM - Bob: Hi Alice",
//!     )?;
//!
//!     for row in &table {
//!         println!("{} [{}] {}: {}", row.only_date, row.period, row.user, row.message);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Diagnostics
//!
//! Segments that can't be used (media placeholders, impossible dates) are
//! skipped without failing the call. Use
//! [`Preprocessor::preprocess_with_report`] to see them, or enable a
//! `tracing` subscriber.
//!
//! ## Module Structure
//!
//! - [`preprocessor`] — [`Preprocessor`], [`preprocess`] and the [`PreprocessReport`]
//! - [`parsing`] — format detection, segment splitting, header timestamps
//! - [`records`] — [`MessageRecord`](records::MessageRecord) building
//! - [`refine`] — sender separation and row assembly
//! - [`table`] — [`ChatTable`] and [`ChatRecord`]
//! - [`config`] — [`PreprocessConfig`](config::PreprocessConfig), [`OutputConfig`](config::OutputConfig)
//! - [`format`] / [`output`] — CSV, JSON and JSONL writers
//! - [`error`] — [`ChatstatError`], [`Result`]
//! - `cli` — clap argument types for the `chatstat` binary (feature `cli`)

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod output;
pub mod parsing;
pub mod preprocessor;
pub mod records;
pub mod refine;
pub mod table;

pub use error::{ChatstatError, Result};
pub use preprocessor::{PreprocessReport, Preprocessed, Preprocessor, preprocess};
pub use table::{ChatRecord, ChatTable};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{ChatRecord, ChatTable};

    pub use crate::error::{ChatstatError, Result, SkipReason, SkippedSegment};

    pub use crate::preprocessor::{PreprocessReport, Preprocessed, Preprocessor, preprocess};

    pub use crate::config::{GROUP_NOTIFICATION, OutputConfig, PreprocessConfig};

    pub use crate::parsing::TimeFormat;

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
