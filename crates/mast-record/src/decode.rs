//! Decoding of JSON response bodies
//!
//! The catalog service answers JSON-format queries with an array of flat
//! objects, one per row.

use crate::value::{RawRecord, json_kind};
use crate::{Error, Result};
use serde_json::Value;
use tracing::debug;

/// Decode a JSON response body into raw records.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the body is not valid JSON or not an array,
/// and [`Error::NotAnObject`] if any element of the array is not an object.
pub fn decode_json_rows(body: &str) -> Result<Vec<RawRecord>> {
    let parsed: Value = serde_json::from_str(body)
        .map_err(|e| Error::decode(format!("invalid JSON response: {e}")))?;

    let rows = match parsed {
        Value::Array(rows) => rows,
        other => {
            return Err(Error::decode(format!(
                "expected a JSON array of rows, found {}",
                json_kind(&other)
            )));
        }
    };

    let records = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| match row {
            Value::Object(map) => Ok(map),
            other => Err(Error::NotAnObject {
                index,
                found: json_kind(&other),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(row_count = records.len(), "Decoded JSON response");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_rows() {
        let body = r#"[{"Kepler ID": "757450", "Period": 8.88}, {"Kepler ID": null}]"#;
        let rows = decode_json_rows(body).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Kepler ID"], json!("757450"));
        assert_eq!(rows[1]["Kepler ID"], json!(null));
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_json_rows("[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_json_rows(r#"{"Kepler ID": 1}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(ref msg) if msg.contains("object")));
    }

    #[test]
    fn test_decode_rejects_non_object_row() {
        let err = decode_json_rows(r#"[{"a": 1}, 5]"#).unwrap_err();
        assert_eq!(
            err,
            Error::NotAnObject {
                index: 1,
                found: "number"
            }
        );
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        assert!(matches!(
            decode_json_rows("[{"),
            Err(Error::Decode(_))
        ));
    }
}
