//! Turning raw segments into timestamped message records.

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::config::PreprocessConfig;
use crate::error::{SkipReason, SkippedSegment};
use crate::parsing::{RawSegment, TimeFormat, is_media_omitted, parse_timestamp};

/// A segment whose header parsed into a timestamp.
///
/// `body` is still raw: it may hold `sender: content`, a system notification,
/// trailing newlines and continuation lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    /// Position of the source segment in split order.
    pub index: usize,
    /// When the message was sent (local wall-clock time).
    pub timestamp: NaiveDateTime,
    /// Everything after the header.
    pub body: String,
}

/// Records that were built plus the segments that were not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordBatch {
    /// Successfully parsed records, in segment order.
    pub records: Vec<MessageRecord>,
    /// Segments left out, in segment order.
    pub skipped: Vec<SkippedSegment>,
}

/// Builds one record from one segment, or says why it can't.
///
/// `format` decides whether a meridiem is required.
pub fn build_record(
    index: usize,
    segment: &RawSegment<'_>,
    format: TimeFormat,
    config: &PreprocessConfig,
) -> Result<MessageRecord, SkipReason> {
    if config.skip_media && is_media_omitted(segment.body) {
        return Err(SkipReason::MediaOmitted);
    }
    if segment.date.is_empty() {
        return Err(SkipReason::MissingField("date"));
    }
    if segment.time.is_empty() {
        return Err(SkipReason::MissingField("time"));
    }

    let meridiem = match (format.has_meridiem(), segment.meridiem) {
        (true, None) => return Err(SkipReason::MissingField("meridiem")),
        (true, marker) => marker,
        (false, _) => None,
    };

    let timestamp = parse_timestamp(segment.date, segment.time, meridiem)
        .map_err(SkipReason::InvalidTimestamp)?;

    Ok(MessageRecord {
        index,
        timestamp,
        body: segment.body.to_string(),
    })
}

/// Builds records for every segment, partitioning failures into `skipped`.
///
/// A bad segment never stops the batch; each one is logged and reported.
pub fn build_records(
    segments: &[RawSegment<'_>],
    format: TimeFormat,
    config: &PreprocessConfig,
) -> RecordBatch {
    let (built, failed): (Vec<_>, Vec<_>) = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            build_record(index, segment, format, config)
                .map_err(|reason| SkippedSegment::new(index, reason, segment.body))
        })
        .partition(Result::is_ok);

    let records: Vec<MessageRecord> = built.into_iter().filter_map(Result::ok).collect();
    let skipped: Vec<SkippedSegment> = failed.into_iter().filter_map(Result::err).collect();

    for skip in &skipped {
        if skip.is_media() {
            debug!(index = skip.index, "skipping media placeholder");
        } else {
            warn!(index = skip.index, reason = %skip.reason, excerpt = %skip.excerpt, "skipping segment");
        }
    }

    RecordBatch { records, skipped }
}
