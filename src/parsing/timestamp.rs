//! Header date/time parsing.

use chrono::NaiveDateTime;

use crate::error::TimestampError;

/// How the year token of a `day/month/year` date is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YearWidth {
    /// `2023`
    Full,
    /// `23`, read as 2000-2068 or 1969-1999
    Short,
}

/// Two-digit years below this land in the 2000s, the rest in the 1900s.
const CENTURY_PIVOT: u32 = 69;

impl YearWidth {
    /// Parse attempts, in order.
    const ATTEMPTS: [YearWidth; 2] = [YearWidth::Full, YearWidth::Short];

    // chrono's %Y happily reads "23" as year 23, so the width is checked up front.
    fn accepts(self, year: &str) -> bool {
        let digits = year.len();
        year.bytes().all(|b| b.is_ascii_digit())
            && match self {
                YearWidth::Full => digits == 4,
                YearWidth::Short => digits == 2,
            }
    }

    // chrono's %y pivots at 70, so short years are widened here instead.
    fn full_year(self, year: &str) -> Option<String> {
        match self {
            YearWidth::Full => Some(year.to_string()),
            YearWidth::Short => {
                let short: u32 = year.parse().ok()?;
                let century = if short < CENTURY_PIVOT { 2000 } else { 1900 };
                Some((century + short).to_string())
            }
        }
    }
}

fn parse_format(twelve_hour: bool) -> &'static str {
    if twelve_hour {
        "%d/%m/%Y, %I:%M %p"
    } else {
        "%d/%m/%Y, %H:%M"
    }
}

/// Parses a header's date and time into a timestamp.
///
/// The date is `day/month/year`. With a `meridiem` the time is read on a
/// 12-hour clock (the marker is upper-cased first), otherwise on a 24-hour
/// clock. A four-digit year is tried first, then a two-digit year.
///
/// # Example
///
/// ```rust
/// use chatstat::parsing::parse_timestamp;
/// use chrono::{NaiveDate, Timelike};
///
/// let ts = parse_timestamp("12/5/23", "10:30", Some("pm"))?;
/// assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2023, 5, 12).unwrap());
/// assert_eq!(ts.hour(), 22);
/// # Ok::<(), chatstat::error::TimestampError>(())
/// ```
pub fn parse_timestamp(
    date: &str,
    time: &str,
    meridiem: Option<&str>,
) -> Result<NaiveDateTime, TimestampError> {
    let combine = |date: &str| match meridiem {
        Some(marker) => format!("{date}, {time} {}", marker.to_uppercase()),
        None => format!("{date}, {time}"),
    };

    let (day_month, year) = date.rsplit_once('/').unwrap_or(("", date));
    let mut attempts = YearWidth::ATTEMPTS
        .into_iter()
        .filter(|width| width.accepts(year))
        .peekable();

    if attempts.peek().is_none() {
        return Err(TimestampError::InvalidYear {
            year: year.to_string(),
        });
    }

    let format = parse_format(meridiem.is_some());
    attempts
        .filter_map(|width| width.full_year(year))
        .find_map(|full| {
            NaiveDateTime::parse_from_str(&combine(&format!("{day_month}/{full}")), format).ok()
        })
        .ok_or_else(|| TimestampError::Unparseable {
            input: combine(date),
        })
}
