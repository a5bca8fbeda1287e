//! JSON Lines (JSONL) output writer.
//!
//! One row object per line; handy for loading into dataframe tools that
//! read newline-delimited JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::OutputConfig;
use crate::error::Result;
use crate::table::ChatTable;

/// Writes the table to a JSONL file.
pub fn write_jsonl(table: &ChatTable, path: impl AsRef<Path>, _config: &OutputConfig) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for row in table {
        serde_json::to_writer(&mut writer, row)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts the table to a JSONL string.
pub fn to_jsonl(table: &ChatTable, _config: &OutputConfig) -> Result<String> {
    let mut output = String::new();
    for row in table {
        output.push_str(&serde_json::to_string(row)?);
        output.push('\n');
    }
    Ok(output)
}
