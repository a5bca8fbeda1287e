//! The output table: one [`ChatRecord`] per kept message.
//!
//! Column names and order are part of the public contract; they are listed in
//! [`ChatTable::COLUMNS`] and match the serialized field names of
//! [`ChatRecord`], so CSV headers and JSON keys line up with what reporting
//! code groups on (`user`, `period`, `only_date`, ...).
//!
//! # Example
//!
//! ```
//! use chatstat::preprocess;
//!
//! let table = preprocess("12/5/23, 10:30 PM - Alice: Hello there")?;
//! let row = &table.rows()[0];
//!
//! assert_eq!(row.user, "Alice");
//! assert_eq!(row.month, "May");
//! assert_eq!(row.day_name, "Friday");
//! assert_eq!(row.period, "22-23");
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::GROUP_NOTIFICATION;

/// A fully classified message with calendar fields derived from its timestamp.
///
/// Built once by [`ChatRecord::new`] and never mutated afterwards.
///
/// | Column | Type | Example |
/// |--------|------|---------|
/// | `datetime` | `NaiveDateTime` | `2023-05-12 22:30:00` |
/// | `user` | `String` | `Alice` / `group_notification` |
/// | `message` | `String` | `Hello there` |
/// | `only_date` | `NaiveDate` | `2023-05-12` |
/// | `year` | `i32` | `2023` |
/// | `month_num` | `u32` | `5` |
/// | `month` | `String` | `May` |
/// | `day` | `u32` | `12` |
/// | `day_name` | `String` | `Friday` |
/// | `hour` | `u32` | `22` |
/// | `minute` | `u32` | `30` |
/// | `period` | `String` | `22-23` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRecord {
    #[serde(with = "datetime_format")]
    pub datetime: NaiveDateTime,
    pub user: String,
    pub message: String,
    pub only_date: NaiveDate,
    pub year: i32,
    pub month_num: u32,
    pub month: String,
    pub day: u32,
    pub day_name: String,
    pub hour: u32,
    pub minute: u32,
    pub period: String,
}

impl ChatRecord {
    /// Creates a record, deriving every calendar and hour-bucket field.
    pub fn new(datetime: NaiveDateTime, user: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            datetime,
            user: user.into(),
            message: message.into(),
            only_date: datetime.date(),
            year: datetime.year(),
            month_num: datetime.month(),
            month: datetime.format("%B").to_string(),
            day: datetime.day(),
            day_name: datetime.format("%A").to_string(),
            hour: datetime.hour(),
            minute: datetime.minute(),
            period: period_label(datetime.hour()),
        }
    }

    /// Returns `true` if this row's sender is `label`, i.e. it is a system
    /// notification rather than a message from a participant.
    pub fn is_notification(&self, label: &str) -> bool {
        self.user == label
    }
}

/// Labels the one-hour bucket an hour falls into.
///
/// `"{h}-{h+1}"` without zero padding, except hour 23 which wraps to `"23-0"`.
///
/// ```
/// use chatstat::table::period_label;
///
/// assert_eq!(period_label(0), "0-1");
/// assert_eq!(period_label(9), "9-10");
/// assert_eq!(period_label(23), "23-0");
/// ```
pub fn period_label(hour: u32) -> String {
    if hour == 23 {
        "23-0".to_string()
    } else {
        format!("{}-{}", hour, hour + 1)
    }
}

/// The final table, in transcript order.
///
/// Remembers which sender label marks notification rows so that
/// [`users`](ChatTable::users) can leave them out. Only the rows are
/// serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatTable {
    rows: Vec<ChatRecord>,
    #[serde(skip)]
    notification_sender: Option<String>,
}

impl ChatTable {
    /// Column names, in output order.
    pub const COLUMNS: [&'static str; 12] = [
        "datetime",
        "user",
        "message",
        "only_date",
        "year",
        "month_num",
        "month",
        "day",
        "day_name",
        "hour",
        "minute",
        "period",
    ];

    /// Creates a table from rows already in transcript order.
    pub fn new(rows: Vec<ChatRecord>) -> Self {
        Self {
            rows,
            notification_sender: None,
        }
    }

    /// Sets the sender label that marks notification rows
    /// (default: `group_notification`).
    #[must_use]
    pub fn with_notification_sender(mut self, label: impl Into<String>) -> Self {
        self.notification_sender = Some(label.into());
        self
    }

    /// The sender label that marks notification rows.
    pub fn notification_sender(&self) -> &str {
        self.notification_sender
            .as_deref()
            .unwrap_or(GROUP_NOTIFICATION)
    }

    /// Returns `true` if `row` is a system notification in this table.
    pub fn is_notification(&self, row: &ChatRecord) -> bool {
        row.is_notification(self.notification_sender())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[ChatRecord] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChatRecord> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<ChatRecord> {
        self.rows
    }

    /// Distinct senders in order of first appearance, notifications excluded.
    pub fn users(&self) -> Vec<&str> {
        let label = self.notification_sender();
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .map(|row| row.user.as_str())
            .filter(|user| *user != label && seen.insert(*user))
            .collect()
    }
}

impl FromIterator<ChatRecord> for ChatTable {
    fn from_iter<I: IntoIterator<Item = ChatRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ChatTable {
    type Item = ChatRecord;
    type IntoIter = std::vec::IntoIter<ChatRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChatTable {
    type Item = &'a ChatRecord;
    type IntoIter = std::slice::Iter<'a, ChatRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// `datetime` column as `YYYY-MM-DD HH:MM:SS`.
mod datetime_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
