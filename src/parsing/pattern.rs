//! Timestamp conventions and format detection.
//!
//! Exported transcripts start every message with a header such as
//! `12/5/23, 10:30 PM - ` (12-hour) or `12/5/2023, 22:30 - ` (24-hour).
//! Detection checks the 12-hour shape first, so a transcript that contains
//! any 12-hour header is never treated as 24-hour.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ChatstatError, Result};

/// `12/5/23, 10:30 PM - `
static TWELVE_HOUR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^(?P<date>\d{1,2}/\d{1,2}/\d{2,4}), (?P<time>\d{1,2}:\d{2}) (?P<meridiem>(?i:am|pm)) - ",
    )
    .unwrap()
});

/// `12/5/2023, 22:30 - `
static TWENTY_FOUR_HOUR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?P<date>\d{1,2}/\d{1,2}/\d{2,4}), (?P<time>\d{1,2}:\d{2}) - ").unwrap()
});

static MEDIA_OMITTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b\w*\s*omitted\b").unwrap());

/// Narrow no-break space some exporters put between the time and AM/PM.
const NARROW_NBSP: char = '\u{202F}';

/// The clock convention a transcript uses in its message headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// `day/month/year, h:mm AM - `
    TwelveHour,
    /// `day/month/year, HH:mm - `
    TwentyFourHour,
}

impl TimeFormat {
    /// Returns all formats in detection priority order.
    pub fn all() -> &'static [TimeFormat] {
        &[TimeFormat::TwelveHour, TimeFormat::TwentyFourHour]
    }

    /// Returns the compiled header pattern for this format.
    ///
    /// Capture groups are named `date`, `time` and, for
    /// [`TwelveHour`](TimeFormat::TwelveHour) only, `meridiem`.
    pub fn regex(self) -> &'static Regex {
        match self {
            TimeFormat::TwelveHour => &TWELVE_HOUR,
            TimeFormat::TwentyFourHour => &TWENTY_FOUR_HOUR,
        }
    }

    /// Returns `true` if headers in this format carry an AM/PM marker.
    pub fn has_meridiem(self) -> bool {
        matches!(self, TimeFormat::TwelveHour)
    }
}

impl std::fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeFormat::TwelveHour => write!(f, "12-hour"),
            TimeFormat::TwentyFourHour => write!(f, "24-hour"),
        }
    }
}

/// Replaces U+202F (narrow no-break space) with an ordinary space.
///
/// Borrows the input unchanged when there is nothing to replace.
pub fn normalize_spaces(text: &str) -> Cow<'_, str> {
    if text.contains(NARROW_NBSP) {
        Cow::Owned(text.replace(NARROW_NBSP, " "))
    } else {
        Cow::Borrowed(text)
    }
}

/// Decides which timestamp convention `text` uses.
///
/// The text is space-normalized before matching. Fails with
/// [`ChatstatError::UnrecognizedFormat`] when neither pattern matches.
///
/// # Example
///
/// ```rust
/// use chatstat::parsing::{TimeFormat, detect_format};
///
/// let format = detect_format("12/5/23, 10:30 PM - Alice: Hello")?;
/// assert_eq!(format, TimeFormat::TwelveHour);
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
pub fn detect_format(text: &str) -> Result<TimeFormat> {
    let text = normalize_spaces(text);

    TimeFormat::all()
        .iter()
        .copied()
        .find(|format| format.regex().is_match(&text))
        .ok_or_else(|| {
            ChatstatError::unrecognized_format(
                "no line starts with a 'day/month/year, hour:minute [AM|PM] - ' header. \
                 Make sure the file is an exported chat transcript.",
            )
        })
}

/// Returns `true` if `body` is a media placeholder like `<Media omitted>`
/// or `image omitted`.
pub fn is_media_omitted(body: &str) -> bool {
    MEDIA_OMITTED.is_match(body)
}
