//! Table writers.
//!
//! - [`write_csv`] / [`to_csv`] - one row per message with a header row - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of rows - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one row per line - requires `json-output` feature
//!
//! Every writer emits exactly the columns in
//! [`ChatTable::COLUMNS`](crate::ChatTable::COLUMNS).
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::config::OutputConfig;
//! use chatstat::output::to_csv;
//!
//! let table = chatstat::preprocess("1/2/2024, 09:15 - Alice: hi")?;
//! let csv = to_csv(&table, &OutputConfig::new())?;
//!
//! assert!(csv.starts_with("datetime,user,message,only_date,"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
