//! Integration test: YAML-described mappings loaded through the registry.

use mast_adapter::{ANGULAR_SEPARATION, AdapterRegistry, Error, FieldMap};
use mast_record::FieldType;
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

#[test]
fn test_load_mapping_fixture() -> anyhow::Result<()> {
    let registry = AdapterRegistry::with_builtin_catalogs();
    let adapter = registry.load_file(&fixture("k2_photometry.yaml"))?;

    assert!(registry.contains("k2_photometry"));
    assert_eq!(adapter.name(), "k2_photometry");

    // the fixture's own separation entry is replaced by the standard one
    let spec = adapter.field_for("Ang Sep (')").expect("separation entry");
    assert_eq!(spec.target, ANGULAR_SEPARATION);
    assert_eq!(spec.field_type, FieldType::Float);
    assert!(!adapter.target_names().contains("separation_text"));
    assert_eq!(adapter.len(), 5);
    Ok(())
}

#[test]
fn test_custom_adapter_applies_rows() -> anyhow::Result<()> {
    let registry = AdapterRegistry::new();
    registry.load_file(&fixture("k2_photometry.yaml"))?;
    let adapter = registry.require("k2_photometry")?;

    let input = json!({
        "EPIC": "201367065",
        "Campaign": "1",
        "KepMag": "11.57",
        "Object type": "STAR",
        "Ang Sep (')": "0.4",
        "Kepflag": "gri",
    });
    let adapted = adapter.apply_with_report(input.as_object().expect("object"));

    assert_eq!(adapted.record.integer("epic_id"), Some(201_367_065));
    assert_eq!(adapted.record.integer("campaign"), Some(1));
    assert_eq!(adapted.record.float("kepmag"), Some(11.57));
    assert_eq!(adapted.record.text("object_type"), Some("STAR"));
    assert_eq!(adapted.record.float(ANGULAR_SEPARATION), Some(0.4));
    assert_eq!(adapted.unrecognized, vec!["Kepflag"]);
    Ok(())
}

#[test]
fn test_reserved_angular_target_from_other_source() -> anyhow::Result<()> {
    let registry = AdapterRegistry::new();
    let adapter = registry.load_file(&fixture("separation_alias.yaml"))?;

    assert!(adapter.field_for("Separation").is_none());
    assert_eq!(adapter.len(), 2);

    let record = adapter.apply(json!({ "Ang Sep (')": "2.5" }).as_object().expect("object"));
    assert_eq!(record.float(ANGULAR_SEPARATION), Some(2.5));

    let adapted = adapter.apply_with_report(
        json!({ "Ang Sep (')": "2.5", "Separation": "9.0", "KepMag": "12.1" })
            .as_object()
            .expect("object"),
    );
    assert_eq!(adapted.record.float(ANGULAR_SEPARATION), Some(2.5));
    assert_eq!(adapted.record.float("kepmag"), Some(12.1));
    assert_eq!(adapted.unrecognized, vec!["Separation"]);
    Ok(())
}

#[test]
fn test_load_from_temp_file() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(
        file,
        "name: tiny\nfields:\n  - {{ source: \"Teff\", target: teff, type: integer }}"
    )?;

    let registry = AdapterRegistry::new();
    let adapter = registry.load_file(file.path())?;
    let record = adapter.apply(json!({ "Teff": "5772" }).as_object().expect("object"));
    assert_eq!(record.integer("teff"), Some(5772));
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let registry = AdapterRegistry::new();
    let err = registry
        .load_file(&fixture("does_not_exist.yaml"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(registry.is_empty());
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let err = FieldMap::parse("name: [unterminated").unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert!(err.to_string().starts_with("Mapping parse error"));
}

#[test]
fn test_builtin_mapping_exports_to_yaml() -> anyhow::Result<()> {
    let mapping = mast_adapter::Catalog::Target.field_map();
    let yaml = mapping.to_yaml()?;
    let reparsed = FieldMap::parse(&yaml)?;
    assert_eq!(reparsed, mapping);
    assert!(yaml.contains("Kepler_ID"));
    Ok(())
}
