//! # mast-adapter-csv
//!
//! CSV decoding of MAST catalog responses.
//!
//! Turns a CSV body into [`RawRecord`](mast_record::RawRecord)s keyed by the
//! header row, ready for any adapter from `mast-adapter`.
//!
//! ## Example Usage
//!
//! ```rust
//! use mast_adapter_csv::{CsvConfig, CsvReader};
//!
//! let config = CsvConfig::new().trim(true).null_value("null");
//! let reader = CsvReader::new().with_config(config);
//!
//! let rows = reader.read_str("Kepler ID,Teq\n757450,null\n").unwrap();
//! assert_eq!(rows.len(), 1);
//! assert!(rows[0]["Teq"].is_null());
//! ```

pub mod config;
pub mod errors;
pub mod reader;

// Re-export main types
pub use config::CsvConfig;
pub use errors::{CsvError, CsvResult, RowLengthMismatchKind};
pub use reader::CsvReader;
