//! Integration test: decoding a catalog response body and reading rows back.

use mast_record::{RawRecord, decode_json_rows};

const KOI_RESPONSE: &str = r#"[
    {"Kepler ID": "10797460", "KOI Name": "K00752.01", "Period": "9.48803557", "Ang Sep (')": "0.012"},
    {"Kepler ID": "10811496", "KOI Name": "K00753.01", "Period": null, "Comments": ""}
]"#;

#[test]
fn test_decode_preserves_published_field_names() -> anyhow::Result<()> {
    let rows: Vec<RawRecord> = decode_json_rows(KOI_RESPONSE)?;
    assert_eq!(rows.len(), 2);

    let first = &rows[0];
    assert!(first.contains_key("Ang Sep (')"));
    assert_eq!(first["KOI Name"].as_str(), Some("K00752.01"));

    let second = &rows[1];
    assert!(second["Period"].is_null());
    assert_eq!(second["Comments"].as_str(), Some(""));
    Ok(())
}
