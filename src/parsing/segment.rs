//! Splitting a transcript into timestamp-delimited segments.

use super::pattern::TimeFormat;

/// One message header plus everything up to the next header.
///
/// Borrowed from the transcript; lives only for one parsing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSegment<'a> {
    /// `day/month/year` token, e.g. `12/5/23`
    pub date: &'a str,
    /// `hour:minute` token, e.g. `10:30`
    pub time: &'a str,
    /// `AM`/`PM` marker as written; only present for 12-hour transcripts
    pub meridiem: Option<&'a str>,
    /// Text after the header up to the next header, continuation lines included
    pub body: &'a str,
}

/// Splits `text` on every header of `format`.
///
/// Text before the first header (an export preamble) is discarded. Segments
/// come back in transcript order, one per header.
///
/// # Example
///
/// ```rust
/// use chatstat::parsing::{TimeFormat, split_segments};
///
/// let text = "24/12/2023, 18:00 - Alice: Merry\nChristmas\n24/12/2023, 18:01 - Bob: 🎄";
/// let segments = split_segments(text, TimeFormat::TwentyFourHour);
///
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].body, "Alice: Merry\nChristmas\n");
/// assert_eq!(segments[1].time, "18:01");
/// ```
pub fn split_segments(text: &str, format: TimeFormat) -> Vec<RawSegment<'_>> {
    let headers: Vec<_> = format.regex().captures_iter(text).collect();

    headers
        .iter()
        .enumerate()
        .filter_map(|(i, caps)| {
            let header = caps.get(0)?;
            let body_end = headers
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(text.len(), |next| next.start());

            Some(RawSegment {
                date: caps.name("date").map_or("", |m| m.as_str()),
                time: caps.name("time").map_or("", |m| m.as_str()),
                meridiem: caps.name("meridiem").map(|m| m.as_str()),
                body: &text[header.end()..body_end],
            })
        })
        .collect()
}
