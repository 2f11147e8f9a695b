#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # mast-record
//!
//! Raw and normalized record types for rows returned by the MAST catalog API.
//!
//! A [`RawRecord`] is a loosely-typed JSON object exactly as the service
//! published it. A [`Record`] is what an adapter produces from it: every
//! configured internal name mapped either to a typed [`FieldValue`] or to the
//! null marker (`None`).

/// Decoding of JSON response bodies into raw records.
pub mod decode;
/// Normalized output records.
pub mod record;
/// Declared field types and coerced values.
pub mod value;

/// JSON body decoding entry point.
pub use decode::decode_json_rows;
/// Normalized record keyed by internal field name.
pub use record::Record;
/// Value primitives shared by adapters and decoders.
pub use value::{FieldType, FieldValue, RawRecord, json_kind};

use thiserror::Error;

/// Errors that can occur when decoding catalog responses
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Row {index} is not a JSON object (found {found})")]
    NotAnObject { index: usize, found: &'static str },
}

impl Error {
    /// Build a decode error from any message.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

/// Crate-local result type for record operations.
pub type Result<T> = std::result::Result<T, Error>;
