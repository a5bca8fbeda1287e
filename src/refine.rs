//! Sender separation and final row assembly.
//!
//! Each [`MessageRecord`] maps to at most one [`ChatRecord`]; sender and
//! message are derived together so the two can never drift apart.

use tracing::debug;

use crate::config::PreprocessConfig;
use crate::error::{SkipReason, SkippedSegment};
use crate::parsing::is_media_omitted;
use crate::records::MessageRecord;
use crate::table::{ChatRecord, ChatTable};

/// Splits `sender: message` on the first colon.
///
/// Returns `None` for an empty body or one without a colon; such bodies are
/// system notifications. Both halves are trimmed. A colon inside the sender
/// name or at the start of the text is not special-cased.
///
/// ```
/// use chatstat::refine::split_sender;
///
/// assert_eq!(split_sender("Alice: see https://x.y"), Some(("Alice", "see https://x.y")));
/// assert_eq!(split_sender("Bob added Carol\n"), None);
/// assert_eq!(split_sender("   "), None);
/// ```
pub fn split_sender(body: &str) -> Option<(&str, &str)> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    body.split_once(':')
        .map(|(sender, message)| (sender.trim(), message.trim()))
}

/// Classifies one record into a final row.
pub fn refine_record(
    record: &MessageRecord,
    config: &PreprocessConfig,
) -> Result<ChatRecord, SkipReason> {
    if config.skip_media && is_media_omitted(&record.body) {
        return Err(SkipReason::MediaOmitted);
    }

    let row = match split_sender(&record.body) {
        Some((sender, message)) => ChatRecord::new(record.timestamp, sender, message),
        None => ChatRecord::new(
            record.timestamp,
            config.notification_sender.as_str(),
            record.body.trim(),
        ),
    };
    Ok(row)
}

/// Builds the final table from parsed records, keeping their order.
///
/// Records rejected here are returned alongside the table.
pub fn refine_records(
    records: &[MessageRecord],
    config: &PreprocessConfig,
) -> (ChatTable, Vec<SkippedSegment>) {
    let mut skipped = Vec::new();

    let table = records
        .iter()
        .filter_map(|record| match refine_record(record, config) {
            Ok(row) => Some(row),
            Err(reason) => {
                debug!(index = record.index, %reason, "dropping record");
                skipped.push(SkippedSegment::new(record.index, reason, &record.body));
                None
            }
        })
        .collect::<ChatTable>()
        .with_notification_sender(config.notification_sender.as_str());

    (table, skipped)
}
