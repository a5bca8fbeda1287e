//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{GROUP_NOTIFICATION, PreprocessConfig};

/// Default output path; its extension follows `--format`.
pub const DEFAULT_OUTPUT: &str = "chat_table.csv";

/// Turn an exported chat transcript into a per-message table
/// (user, date, weekday, hour bucket, ...) for activity statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat chat.txt
    chatstat chat.txt -o stats.json -f json
    chatstat chat.txt --keep-media --notification-label system
    RUST_LOG=chatstat=debug chatstat chat.txt")]
pub struct Args {
    /// Path to the exported transcript
    pub input: PathBuf,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Keep media placeholders ("<Media omitted>") as regular rows
    #[arg(long)]
    pub keep_media: bool,

    /// Sender name for system notifications
    #[arg(long, value_name = "NAME", default_value = GROUP_NOTIFICATION)]
    pub notification_label: String,

    /// List every skipped segment in the summary
    #[arg(long)]
    pub show_skipped: bool,

    /// Log debug diagnostics to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the preprocessing configuration from the flags.
    pub fn preprocess_config(&self) -> PreprocessConfig {
        PreprocessConfig::new()
            .with_skip_media(!self.keep_media)
            .with_notification_sender(self.notification_label.clone())
    }

    /// Returns the output path, swapping the default path's extension to
    /// match `--format`.
    pub fn output_path(&self) -> PathBuf {
        if self.output.as_os_str() != DEFAULT_OUTPUT {
            return self.output.clone();
        }
        let format: crate::format::OutputFormat = self.format.into();
        self.output.with_extension(format.extension())
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum OutputFormat {
    /// CSV with a header row
    Csv,
    /// JSON array
    Json,
    /// JSON Lines
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
