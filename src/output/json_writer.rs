//! JSON output writer.

use std::fs;
use std::path::Path;

use crate::config::OutputConfig;
use crate::error::Result;
use crate::table::ChatTable;

/// Writes the table to a JSON file as an array of row objects.
///
/// # Format
/// ```json
/// [
///   {"datetime": "2023-05-12 22:30:00", "user": "Alice", "message": "Hello", ...}
/// ]
/// ```
pub fn write_json(table: &ChatTable, path: impl AsRef<Path>, config: &OutputConfig) -> Result<()> {
    let json = to_json(table, config)?;
    fs::write(path, json)?;
    Ok(())
}

/// Converts the table to a JSON array string.
pub fn to_json(table: &ChatTable, config: &OutputConfig) -> Result<String> {
    let json = if config.pretty {
        serde_json::to_string_pretty(table)?
    } else {
        serde_json::to_string(table)?
    };
    Ok(json)
}
