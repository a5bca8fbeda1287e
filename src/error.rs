//! Error types for chatstat.
//!
//! Errors come in two tiers:
//!
//! - [`ChatstatError`] is returned to the caller and aborts the whole call.
//!   For parsing, the only such failure is an unrecognized transcript format.
//! - [`TimestampError`] and [`SkipReason`] describe recoverable, per-segment
//!   problems. The offending segment is dropped and reported through
//!   [`SkippedSegment`]; the rest of the transcript is still processed.

use std::io;

use serde::Serialize;
use thiserror::Error;

/// A specialized [`Result`] type for chatstat operations.
///
/// # Example
///
/// ```rust
/// use chatstat::error::Result;
/// use chatstat::ChatTable;
///
/// fn load() -> Result<ChatTable> {
///     chatstat::preprocess("1/2/2024, 09:15 - Alice: hi")
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

/// The error type for all chatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// Neither the 12-hour nor the 24-hour timestamp pattern matched anywhere
    /// in the transcript. No partial table is produced.
    #[error("Unrecognized chat format: {message}")]
    UnrecognizedFormat {
        /// Description of what was expected
        message: String,
    },

    /// An I/O error occurred while reading a transcript or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// An output format name or file extension was not understood.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatstatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatError::Io(io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

impl ChatstatError {
    /// Creates the fatal unrecognized-format error.
    pub fn unrecognized_format(message: impl Into<String>) -> Self {
        ChatstatError::UnrecognizedFormat {
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if the transcript format was not recognized.
    pub fn is_unrecognized_format(&self) -> bool {
        matches!(self, ChatstatError::UnrecognizedFormat { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatError::Io(_))
    }
}

/// Why a date/time pair could not be turned into a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum TimestampError {
    /// The year token is neither two nor four digits long.
    #[error("year '{year}' is neither two nor four digits")]
    InvalidYear {
        /// The offending year token
        year: String,
    },

    /// Both year interpretations were tried and rejected.
    #[error("'{input}' is not a valid date and time")]
    Unparseable {
        /// The combined date-time string that was attempted
        input: String,
    },
}

/// Why a single segment was left out of the table.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// The body is a media placeholder such as `<Media omitted>`.
    #[error("media placeholder")]
    MediaOmitted,

    /// The date/time header failed both year interpretations.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(TimestampError),

    /// A header field the format requires was empty or absent.
    #[error("missing {0}")]
    MissingField(&'static str),
}

/// A recoverable exclusion reported on the diagnostics side channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSegment {
    /// Position of the segment in split order (0-based).
    pub index: usize,
    /// Why it was dropped.
    pub reason: SkipReason,
    /// The first few characters of the body, for display.
    pub excerpt: String,
}

const EXCERPT_CHARS: usize = 40;

impl SkippedSegment {
    /// Creates a skip record, keeping a short excerpt of `body`.
    pub fn new(index: usize, reason: SkipReason, body: &str) -> Self {
        let trimmed = body.trim();
        let excerpt = match trimmed.char_indices().nth(EXCERPT_CHARS) {
            Some((cut, _)) => format!("{}…", &trimmed[..cut]),
            None => trimmed.to_string(),
        };
        Self {
            index,
            reason,
            excerpt,
        }
    }

    /// Returns `true` if the segment was a media placeholder.
    pub fn is_media(&self) -> bool {
        matches!(self.reason, SkipReason::MediaOmitted)
    }
}

impl std::fmt::Display for SkippedSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "segment {} ({}): {}", self.index, self.reason, self.excerpt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_format_display() {
        let err = ChatstatError::unrecognized_format("no timestamps found");
        assert!(err.is_unrecognized_format());
        assert!(!err.is_io());
        assert_eq!(
            err.to_string(),
            "Unrecognized chat format: no timestamps found"
        );
    }

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatstatError::from(io_err);
        assert!(err.is_io());
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatstatError::invalid_format("output", "unknown extension '.txt'");
        assert_eq!(
            err.to_string(),
            "Invalid output format: unknown extension '.txt'"
        );
    }

    #[test]
    fn test_skip_reason_display() {
        let reason = SkipReason::InvalidTimestamp(TimestampError::Unparseable {
            input: "1/13/2024, 10:00".into(),
        });
        assert_eq!(
            reason.to_string(),
            "invalid timestamp: '1/13/2024, 10:00' is not a valid date and time"
        );
        assert_eq!(SkipReason::MissingField("time").to_string(), "missing time");
    }

    #[test]
    fn test_skipped_segment_excerpt_is_truncated() {
        let body = "x".repeat(100);
        let skipped = SkippedSegment::new(3, SkipReason::MediaOmitted, &body);
        assert_eq!(skipped.excerpt.chars().count(), EXCERPT_CHARS + 1);
        assert!(skipped.excerpt.ends_with('…'));
        assert!(skipped.is_media());
    }

    #[test]
    fn test_skipped_segment_excerpt_multibyte() {
        let body = "Привет ".repeat(20);
        let skipped = SkippedSegment::new(0, SkipReason::MediaOmitted, &body);
        assert!(skipped.excerpt.starts_with("Привет"));
    }

    #[test]
    fn test_skipped_segment_display() {
        let skipped = SkippedSegment::new(7, SkipReason::MediaOmitted, " <Media omitted>\n");
        assert_eq!(
            skipped.to_string(),
            "segment 7 (media placeholder): <Media omitted>"
        );
    }
}
