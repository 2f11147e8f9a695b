//! Type coercion
//!
//! One conversion function per declared [`FieldType`], selected through
//! [`converter`]. Conversions are fallible and never panic; the adapter turns
//! every failure into the null marker.

use mast_record::{FieldType, FieldValue, json_kind};
use serde_json::{Number, Value};
use std::num::IntErrorKind;
use thiserror::Error;

/// Why a raw value could not be converted to its declared type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoercionError {
    #[error("value is missing or null")]
    Missing,

    #[error("cannot convert a JSON {found} to {target}")]
    Unsupported {
        target: FieldType,
        found: &'static str,
    },

    #[error("cannot parse {input:?} as {target}")]
    Unparseable { target: FieldType, input: String },

    #[error("{value} is not a whole number")]
    NotWhole { value: String },

    #[error("{value} does not fit in a 64-bit integer")]
    OutOfRange { value: String },
}

/// Signature shared by all conversion functions.
pub type Converter = fn(&Value) -> Result<FieldValue, CoercionError>;

/// Conversion function for a declared type.
#[must_use]
pub fn converter(field_type: FieldType) -> Converter {
    match field_type {
        FieldType::Integer => to_integer,
        FieldType::Float => to_float,
        FieldType::Text => to_text,
    }
}

/// Coerce an optional raw value. `None` stands for a field the row did not carry.
///
/// # Errors
///
/// Returns [`CoercionError::Missing`] for absent or null values, otherwise
/// whatever the type's conversion function reports.
pub fn coerce(raw: Option<&Value>, field_type: FieldType) -> Result<FieldValue, CoercionError> {
    match raw {
        None => Err(CoercionError::Missing),
        Some(value) => converter(field_type)(value),
    }
}

/// Convert to a whole number.
///
/// Strings are trimmed and must then be an optionally signed run of decimal
/// digits. Numbers must be whole; fractional values are rejected rather than
/// truncated.
///
/// # Errors
///
/// Fails on null, booleans, arrays, objects, empty or non-integer strings,
/// fractional numbers and values outside `i64`.
pub fn to_integer(value: &Value) -> Result<FieldValue, CoercionError> {
    match value {
        Value::Null => Err(CoercionError::Missing),
        Value::Number(number) => number_to_integer(number),
        Value::String(s) => parse_integer(s),
        other => Err(CoercionError::Unsupported {
            target: FieldType::Integer,
            found: json_kind(other),
        }),
    }
}

/// Convert to a floating-point number.
///
/// Strings are trimmed and parsed as a decimal, exponent or `inf`/`nan`
/// spelling. Digit-group separators (`_`, `,`) are not accepted.
///
/// # Errors
///
/// Fails on null, booleans, arrays, objects, and strings that do not parse
/// as a decimal number after trimming.
pub fn to_float(value: &Value) -> Result<FieldValue, CoercionError> {
    match value {
        Value::Null => Err(CoercionError::Missing),
        Value::Number(number) => {
            number
                .as_f64()
                .map(FieldValue::Float)
                .ok_or_else(|| CoercionError::Unparseable {
                    target: FieldType::Float,
                    input: number.to_string(),
                })
        }
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<f64>()
                .map(FieldValue::Float)
                .map_err(|_| CoercionError::Unparseable {
                    target: FieldType::Float,
                    input: s.clone(),
                })
        }
        other => Err(CoercionError::Unsupported {
            target: FieldType::Float,
            found: json_kind(other),
        }),
    }
}

/// Convert to text.
///
/// Strings pass through untouched, scalars use their JSON spelling and
/// nested values are rendered as compact JSON. Null never becomes text.
///
/// # Errors
///
/// Fails only on null.
pub fn to_text(value: &Value) -> Result<FieldValue, CoercionError> {
    match value {
        Value::Null => Err(CoercionError::Missing),
        Value::String(s) => Ok(FieldValue::Text(s.clone())),
        other => Ok(FieldValue::Text(other.to_string())),
    }
}

fn parse_integer(input: &str) -> Result<FieldValue, CoercionError> {
    input
        .trim()
        .parse::<i64>()
        .map(FieldValue::Integer)
        .map_err(|error| match error.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => CoercionError::OutOfRange {
                value: input.to_string(),
            },
            _ => CoercionError::Unparseable {
                target: FieldType::Integer,
                input: input.to_string(),
            },
        })
}

// i64::MIN is exactly representable; i64::MAX + 1 is the first float past the range.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

#[allow(clippy::cast_possible_truncation)]
fn number_to_integer(number: &Number) -> Result<FieldValue, CoercionError> {
    if let Some(i) = number.as_i64() {
        return Ok(FieldValue::Integer(i));
    }
    if number.is_u64() {
        return Err(CoercionError::OutOfRange {
            value: number.to_string(),
        });
    }

    let float = number.as_f64().ok_or_else(|| CoercionError::Unparseable {
        target: FieldType::Integer,
        input: number.to_string(),
    })?;

    if !float.is_finite() || float < I64_LOWER || float >= I64_UPPER {
        return Err(CoercionError::OutOfRange {
            value: number.to_string(),
        });
    }
    if float.fract() != 0.0 {
        return Err(CoercionError::NotWhole {
            value: number.to_string(),
        });
    }

    Ok(FieldValue::Integer(float as i64))
}
