//! # mast-adapter
//!
//! Field-renaming, type-coercing adapters for MAST catalog records.
//!
//! The catalog service publishes rows with display-oriented column names
//! (`"Kepler ID"`, `"Semi-major Axis err2"`) and loosely-typed values. An
//! [`Adapter`] turns each row into a [`Record`](mast_record::Record) keyed by
//! stable internal names, with every value coerced to its declared type or
//! set to null.
//!
//! ```rust
//! use mast_adapter::{Catalog, KOI_ADAPTER};
//! use serde_json::json;
//!
//! let row = json!({ "Kepler ID": "10797460", "Period": "9.488", "Teq": "12.5" });
//! let record = KOI_ADAPTER.apply(row.as_object().unwrap());
//!
//! assert_eq!(record.integer("kepid"), Some(10797460));
//! assert_eq!(record.float("koi_period"), Some(9.488));
//! assert!(record.is_null("koi_teq"));
//! assert_eq!(record.len(), Catalog::Koi.adapter().len());
//! ```

pub mod adapter;
pub mod batch;
pub mod catalogs;
pub mod coerce;
pub mod field_map;
pub mod registry;
pub mod tables;

pub use adapter::{ANGULAR_SEPARATION, ANGULAR_SEPARATION_SOURCE, Adapted, Adapter};
pub use batch::{BatchOutput, BatchSummary};
pub use catalogs::{
    Catalog, DATASET_ADAPTER, EPIC_ADAPTER, K2_DATASET_ADAPTER, KOI_ADAPTER, PLANET_ADAPTER,
    STAR_ADAPTER, TARGET_ADAPTER,
};
pub use coerce::{CoercionError, coerce};
pub use field_map::{FieldMap, FieldSpec};
pub use registry::AdapterRegistry;

use thiserror::Error;

/// Errors that can occur when configuring adapters
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid mapping '{mapping}': {reason}")]
    InvalidMapping { mapping: String, reason: String },

    #[error("Mapping parse error: {message}")]
    Parse {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    #[error("Unknown adapter: {0}")]
    UnknownAdapter(String),

    #[error("Unknown catalog: {0}")]
    UnknownCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build an invalid-mapping error with the mapping name for context.
    pub fn invalid_mapping(mapping: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidMapping {
            mapping: mapping.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
