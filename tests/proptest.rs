//! Property-based tests for chatstat.
//!
//! These tests generate random transcripts to find edge cases.

use proptest::prelude::*;

use chatstat::config::{GROUP_NOTIFICATION, PreprocessConfig};
use chatstat::parsing::{TimeFormat, detect_format, is_media_omitted};
use chatstat::records::MessageRecord;
use chatstat::refine::refine_record;
use chatstat::table::period_label;
use chatstat::{Preprocessor, preprocess};
use chrono::NaiveDate;

/// One generated line: (day, month, hour, minute, sender, content)
type Line = (u32, u32, u32, u32, String, String);

fn arb_line() -> impl Strategy<Value = Line> {
    (
        1u32..=28,
        1u32..=12,
        0u32..24,
        0u32..60,
        prop::sample::select(vec![
            "Alice".to_string(),
            "Bob".to_string(),
            "Иван".to_string(),
            "+1 555 0100".to_string(),
            "User 🎉".to_string(),
        ]),
        prop::sample::select(vec![
            "Hello".to_string(),
            "Hi there!".to_string(),
            "meet at 10:30".to_string(),
            "Привет мир".to_string(),
            "line one\nline two".to_string(),
            "🎉🔥 emoji".to_string(),
        ]),
    )
}

fn arb_lines(max_len: usize) -> impl Strategy<Value = Vec<Line>> {
    prop::collection::vec(arb_line(), 1..max_len)
}

fn render_24h(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|(d, m, h, min, sender, content)| {
            format!("{d}/{m}/2024, {h:02}:{min:02} - {sender}: {content}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_12h(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|(d, m, h, min, sender, content)| {
            let (clock, marker) = match h {
                0 => (12, "AM"),
                1..=11 => (*h, "AM"),
                12 => (12, "PM"),
                _ => (h - 12, "PM"),
            };
            format!("{d}/{m}/24, {clock}:{min:02}\u{202F}{marker} - {sender}: {content}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PERIOD PROPERTIES
    // ============================================

    /// Every hour maps to "{h}-{h+1}", wrapping only at 23
    #[test]
    fn period_label_shape(hour in 0u32..24) {
        let label = period_label(hour);
        if hour == 23 {
            prop_assert_eq!(label, "23-0");
        } else {
            prop_assert_eq!(label, format!("{}-{}", hour, hour + 1));
        }
    }

    // ============================================
    // PIPELINE PROPERTIES
    // ============================================

    /// Every well-formed 24-hour line becomes exactly one row, in order
    #[test]
    fn twenty_four_hour_rows_match_lines(lines in arb_lines(30)) {
        let table = preprocess(&render_24h(&lines)).unwrap();
        prop_assert_eq!(table.len(), lines.len());

        for (row, (d, m, h, min, sender, content)) in table.iter().zip(&lines) {
            prop_assert_eq!(&row.user, sender);
            prop_assert_eq!(&row.message, content);
            prop_assert_eq!(row.day, *d);
            prop_assert_eq!(row.month_num, *m);
            prop_assert_eq!(row.hour, *h);
            prop_assert_eq!(row.minute, *min);
            prop_assert_eq!(&row.period, &period_label(*h));
        }
    }

    /// 12-hour rendering of the same lines yields the same rows
    #[test]
    fn twelve_and_twenty_four_hour_agree(lines in arb_lines(20)) {
        let from_24h = preprocess(&render_24h(&lines)).unwrap();
        let from_12h = preprocess(&render_12h(&lines)).unwrap();
        prop_assert_eq!(from_24h, from_12h);
    }

    /// Any transcript with a 12-hour header is read as 12-hour
    #[test]
    fn twelve_hour_takes_priority(lines in arb_lines(10), extra in arb_lines(10)) {
        let text = format!("{}\n{}", render_12h(&lines), render_24h(&extra));
        prop_assert_eq!(detect_format(&text).unwrap(), TimeFormat::TwelveHour);
    }

    /// Parsing the same text twice gives the same table
    #[test]
    fn preprocess_is_idempotent(lines in arb_lines(20)) {
        let text = render_24h(&lines);
        prop_assert_eq!(preprocess(&text).unwrap(), preprocess(&text).unwrap());
    }

    /// Every segment is either a row or a reported skip
    #[test]
    fn rows_plus_skipped_equals_segments(lines in arb_lines(20), bad in 0usize..20) {
        let mut text_lines: Vec<String> = render_24h(&lines).lines().map(String::from).collect();
        let at = bad % text_lines.len();
        text_lines.insert(at, "31/2/2024, 10:00 - Ghost: no such day".to_string());

        let out = Preprocessor::new().preprocess_with_report(&text_lines.join("\n")).unwrap();
        prop_assert_eq!(out.table.len() + out.report.skipped.len(), out.report.segments);
        prop_assert_eq!(out.report.invalid_skipped(), 1);
    }

    // ============================================
    // SENDER PROPERTIES
    // ============================================

    /// A body is a notification exactly when it is blank or has no colon
    #[test]
    fn notification_iff_no_colon(body in "[a-zA-Z :]{0,30}") {
        prop_assume!(!is_media_omitted(&body));
        let record = MessageRecord {
            index: 0,
            timestamp: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap(),
            body: body.clone(),
        };
        let row = refine_record(&record, &PreprocessConfig::default()).unwrap();
        let expect_notification = body.trim().is_empty() || !body.contains(':');
        prop_assert_eq!(row.user == GROUP_NOTIFICATION, expect_notification);
    }
}
