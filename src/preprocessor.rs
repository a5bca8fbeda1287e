//! The transcript-to-table pipeline.
//!
//! ```text
//! raw text ─▶ normalize ─▶ detect format ─▶ split ─▶ build records ─▶ refine ─▶ ChatTable
//! ```
//!
//! The whole transcript is held in memory. A call either returns a complete
//! table or fails with [`ChatstatError::UnrecognizedFormat`]; bad segments are
//! skipped and only show up in the [`PreprocessReport`].

use serde::Serialize;
use tracing::{debug, info};

use crate::config::PreprocessConfig;
use crate::error::{Result, SkippedSegment};
use crate::parsing::{TimeFormat, detect_format, normalize_spaces, split_segments};
use crate::records::build_records;
use crate::refine::refine_records;
use crate::table::ChatTable;

/// Diagnostics collected while building a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreprocessReport {
    /// The detected timestamp convention.
    pub format: TimeFormat,
    /// Number of timestamp-delimited segments found.
    pub segments: usize,
    /// Segments that did not make it into the table, in segment order.
    pub skipped: Vec<SkippedSegment>,
}

impl PreprocessReport {
    /// Number of media placeholders dropped.
    pub fn media_skipped(&self) -> usize {
        self.skipped.iter().filter(|s| s.is_media()).count()
    }

    /// Number of segments dropped for reasons other than media.
    pub fn invalid_skipped(&self) -> usize {
        self.skipped.len() - self.media_skipped()
    }
}

/// A table together with its diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preprocessed {
    pub table: ChatTable,
    pub report: PreprocessReport,
}

/// Turns exported chat transcripts into [`ChatTable`]s.
///
/// # Example
///
/// ```rust
/// use chatstat::Preprocessor;
/// use chatstat::config::PreprocessConfig;
///
/// let preprocessor = Preprocessor::with_config(PreprocessConfig::new().with_skip_media(false));
/// let out = preprocessor.preprocess_with_report("1/2/2024, 09:15 - Alice: <Media omitted>")?;
///
/// assert_eq!(out.table.len(), 1);
/// assert!(out.report.skipped.is_empty());
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    config: PreprocessConfig,
}

impl Preprocessor {
    /// Creates a preprocessor with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a preprocessor with custom configuration.
    pub fn with_config(config: PreprocessConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &PreprocessConfig {
        &self.config
    }

    /// Parses `text` into a table, discarding diagnostics.
    pub fn preprocess(&self, text: &str) -> Result<ChatTable> {
        self.preprocess_with_report(text).map(|out| out.table)
    }

    /// Parses `text` into a table and reports what was skipped.
    pub fn preprocess_with_report(&self, text: &str) -> Result<Preprocessed> {
        let text = normalize_spaces(text);

        let format = detect_format(&text)?;
        info!(%format, "detected chat format");

        let segments = split_segments(&text, format);
        let batch = build_records(&segments, format, &self.config);
        let (table, refine_skipped) = refine_records(&batch.records, &self.config);

        let mut skipped = batch.skipped;
        skipped.extend(refine_skipped);
        skipped.sort_by_key(|s| s.index);

        debug!(
            segments = segments.len(),
            rows = table.len(),
            skipped = skipped.len(),
            "preprocessing finished"
        );

        Ok(Preprocessed {
            table,
            report: PreprocessReport {
                format,
                segments: segments.len(),
                skipped,
            },
        })
    }
}

/// Parses a transcript with default settings.
///
/// # Example
///
/// ```rust
/// let table = chatstat::preprocess(
///     "12/5/23, 10:30 PM - Alice: Hello there\n12/5/23, 10:31 PM - Bob: Hi Alice",
/// )?;
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.rows()[1].user, "Bob");
/// assert_eq!(table.rows()[1].minute, 31);
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
pub fn preprocess(text: &str) -> Result<ChatTable> {
    Preprocessor::new().preprocess(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_twelve_hour() {
        let text = "12/5/23, 10:30 PM - Alice: Hello there\n12/5/23, 10:31 PM - Bob: Hi Alice";
        let table = preprocess(text).unwrap();

        assert_eq!(table.len(), 2);
        let first = &table.rows()[0];
        assert_eq!(first.user, "Alice");
        assert_eq!(first.message, "Hello there");
        assert_eq!(first.hour, 22);
        assert_eq!(first.period, "22-23");

        let second = &table.rows()[1];
        assert_eq!(second.user, "Bob");
        assert_eq!(second.message, "Hi Alice");
        assert_eq!(second.hour, 22);
        assert_eq!(second.minute, 31);
        assert_eq!(second.period, "22-23");
    }

    #[test]
    fn test_unrecognized_format_is_fatal() {
        let err = preprocess("hello\nworld").unwrap_err();
        assert!(err.is_unrecognized_format());
    }

    #[test]
    fn test_report_counts() {
        let text = "\
1/2/2024, 09:15 - Alice: hi
1/2/2024, 09:16 - Bob: <Media omitted>
1/13/2024, 09:17 - Carol: bad month
1/2/2024, 09:18 - Alice: bye";
        let out = Preprocessor::new().preprocess_with_report(text).unwrap();

        assert_eq!(out.report.format, TimeFormat::TwentyFourHour);
        assert_eq!(out.report.segments, 4);
        assert_eq!(out.report.media_skipped(), 1);
        assert_eq!(out.report.invalid_skipped(), 1);
        assert_eq!(out.table.len(), 2);
    }

    #[test]
    fn test_narrow_nbsp_is_normalized() {
        let text = "12/5/23, 10:30\u{202F}PM - Alice: Hello";
        let table = preprocess(text).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].hour, 22);
    }
}
