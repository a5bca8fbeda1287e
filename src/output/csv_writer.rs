//! CSV output writer.

use std::io;
use std::path::Path;

use crate::config::OutputConfig;
use crate::error::{ChatstatError, Result};
use crate::table::ChatTable;

/// Writes the table to a CSV file.
///
/// # Format
/// - Delimiter: from `OutputConfig` (default `,`)
/// - Header: [`ChatTable::COLUMNS`], written even for an empty table
/// - `datetime` as `YYYY-MM-DD HH:MM:SS`, `only_date` as `YYYY-MM-DD`
/// - Encoding: UTF-8
pub fn write_csv(table: &ChatTable, path: impl AsRef<Path>, config: &OutputConfig) -> Result<()> {
    let writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(false)
        .from_path(path)?;
    write_rows(writer, table)?;
    Ok(())
}

/// Converts the table to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(table: &ChatTable, config: &OutputConfig) -> Result<String> {
    let writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(false)
        .from_writer(Vec::new());
    let bytes = write_rows(writer, table)?
        .into_inner()
        .map_err(|e| ChatstatError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn write_rows<W: io::Write>(mut writer: csv::Writer<W>, table: &ChatTable) -> Result<csv::Writer<W>> {
    writer.write_record(ChatTable::COLUMNS)?;
    for row in table {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocess;
    use tempfile::NamedTempFile;

    #[test]
    fn test_to_csv_basic() {
        let table = preprocess("12/5/23, 10:30 PM - Alice: Hello there").unwrap();
        let csv = to_csv(&table, &OutputConfig::new()).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next().unwrap(),
            "datetime,user,message,only_date,year,month_num,month,day,day_name,hour,minute,period"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2023-05-12 22:30:00,Alice,Hello there,2023-05-12,2023,5,May,12,Friday,22,30,22-23"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_to_csv_empty_table_has_header() {
        let csv = to_csv(&ChatTable::default(), &OutputConfig::new()).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_to_csv_custom_delimiter_and_quoting() {
        let table = preprocess("1/2/2024, 09:15 - Alice: a; b\nsecond line").unwrap();
        let csv = to_csv(&table, &OutputConfig::new().with_delimiter(b';')).unwrap();

        assert!(csv.starts_with("datetime;user;message;"));
        assert!(csv.contains("\"a; b\nsecond line\""));
    }

    #[test]
    fn test_write_csv_file() {
        let table = preprocess("1/2/2024, 09:15 - Alice: hi").unwrap();
        let temp_file = NamedTempFile::new().unwrap();

        write_csv(&table, temp_file.path(), &OutputConfig::new()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("2024-02-01 09:15:00,Alice,hi,2024-02-01,2024,2,February,1,Thursday,9,15,9-10"));
    }
}
