//! Configuration types for preprocessing and output.
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::PreprocessConfig;
//! use chatstat::Preprocessor;
//!
//! let config = PreprocessConfig::new()
//!     .with_skip_media(false)
//!     .with_notification_sender("system");
//!
//! let preprocessor = Preprocessor::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Sender assigned to lines that have no `sender: message` shape.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Configuration for turning a transcript into a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Drop media placeholders such as `<Media omitted>` (default: true)
    pub skip_media: bool,

    /// Sender used for system notifications (default: `group_notification`)
    pub notification_sender: String,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            skip_media: true,
            notification_sender: GROUP_NOTIFICATION.to_string(),
        }
    }
}

impl PreprocessConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether media placeholders are dropped.
    #[must_use]
    pub fn with_skip_media(mut self, skip: bool) -> Self {
        self.skip_media = skip;
        self
    }

    /// Sets the sender label for system notifications.
    #[must_use]
    pub fn with_notification_sender(mut self, sender: impl Into<String>) -> Self {
        self.notification_sender = sender.into();
        self
    }
}

/// Configuration for the table writers.
///
/// # Example
///
/// ```rust
/// use chatstat::config::OutputConfig;
///
/// let config = OutputConfig::new().with_delimiter(b';').compact();
/// assert_eq!(config.delimiter, b';');
/// assert!(!config.pretty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// CSV field delimiter (default: `,`)
    pub delimiter: u8,

    /// Pretty-print JSON arrays (default: true). JSONL is always compact.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            pretty: true,
        }
    }
}

impl OutputConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the CSV delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Disables JSON pretty-printing.
    #[must_use]
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}
