//! The field-renaming, type-coercing adapter

use crate::batch::{BatchOutput, BatchSummary};
use crate::coerce::coerce;
use crate::field_map::{FieldMap, FieldSpec};
use mast_record::{FieldType, FieldValue, RawRecord, Record};
use std::collections::BTreeSet;
use tracing::{debug, trace, warn};

/// Published name of the cone-search separation column.
pub const ANGULAR_SEPARATION_SOURCE: &str = "Ang Sep (')";

/// Internal name of the cone-search separation field, present in every adapter.
pub const ANGULAR_SEPARATION: &str = "angular_separation";

/// Maps raw catalog rows to normalized records.
///
/// Every output record carries exactly the adapter's internal names. Values
/// that are missing or fail to convert become the null marker; published
/// fields the mapping does not know are reported and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adapter {
    fields: FieldMap,
}

/// A normalized record together with the published fields that were dropped
#[derive(Debug, Clone, PartialEq)]
pub struct Adapted {
    /// The normalized record
    pub record: Record,

    /// Published field names the mapping does not know, sorted
    pub unrecognized: Vec<String>,
}

impl Adapter {
    /// Create an adapter, adding the angular separation field to the mapping.
    ///
    /// Any existing entry for [`ANGULAR_SEPARATION_SOURCE`], and any other
    /// entry producing [`ANGULAR_SEPARATION`], is replaced by the standard one.
    #[must_use]
    pub fn new(mut fields: FieldMap) -> Self {
        for replaced in fields.remove_target(ANGULAR_SEPARATION) {
            debug!(
                adapter = %fields.name(),
                field = %replaced.source,
                "Replacing mapping for reserved angular separation field"
            );
        }
        fields.insert(
            ANGULAR_SEPARATION_SOURCE,
            ANGULAR_SEPARATION,
            FieldType::Float,
        );
        debug!(adapter = %fields.name(), field_count = fields.len(), "Built adapter");
        Self { fields }
    }

    /// Name of the underlying mapping
    #[must_use]
    pub fn name(&self) -> &str {
        self.fields.name()
    }

    /// The full mapping, including the angular separation entry
    #[must_use]
    pub fn field_map(&self) -> &FieldMap {
        &self.fields
    }

    /// Internal names every output record carries
    #[must_use]
    pub fn target_names(&self) -> BTreeSet<&str> {
        self.fields.target_names()
    }

    /// Entry for a published field name
    #[must_use]
    pub fn field_for(&self, source: &str) -> Option<&FieldSpec> {
        self.fields.get(source)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Normalize one row. Never fails.
    #[must_use]
    pub fn apply(&self, row: &RawRecord) -> Record {
        self.apply_with_report(row).record
    }

    /// Normalize one row and report the published fields that were dropped.
    #[must_use]
    pub fn apply_with_report(&self, row: &RawRecord) -> Adapted {
        let record = self
            .fields
            .iter()
            .map(|spec| (spec.target.clone(), self.convert(spec, row)))
            .collect::<Record>();

        let mut unrecognized: Vec<String> = row
            .keys()
            .filter(|name| self.fields.get(name).is_none())
            .cloned()
            .collect();
        unrecognized.sort();

        for name in &unrecognized {
            warn!(adapter = %self.name(), field = %name, "Unrecognized parameter");
        }

        Adapted {
            record,
            unrecognized,
        }
    }

    /// Normalize a sequence of rows, one record per row in input order.
    pub fn apply_all<'a, I>(&self, rows: I) -> Vec<Record>
    where
        I: IntoIterator<Item = &'a RawRecord>,
    {
        rows.into_iter().map(|row| self.apply(row)).collect()
    }

    /// Normalize a sequence of rows and summarize nulls and dropped fields.
    pub fn apply_batch<'a, I>(&self, rows: I) -> BatchOutput
    where
        I: IntoIterator<Item = &'a RawRecord>,
    {
        let mut summary = BatchSummary::new(self.target_names());
        let records = rows
            .into_iter()
            .map(|row| {
                let adapted = self.apply_with_report(row);
                summary.observe(&adapted);
                adapted.record
            })
            .collect();

        debug!(
            adapter = %self.name(),
            record_count = summary.record_count,
            unrecognized_names = summary.unrecognized.len(),
            "Adapted batch"
        );
        BatchOutput { records, summary }
    }

    fn convert(&self, spec: &FieldSpec, row: &RawRecord) -> Option<FieldValue> {
        let raw = row.get(&spec.source);
        match coerce(raw, spec.field_type) {
            Ok(value) => Some(value),
            Err(error) => {
                if raw.is_some() {
                    trace!(
                        adapter = %self.name(),
                        field = %spec.source,
                        %error,
                        "Coercion failed, storing null"
                    );
                }
                None
            }
        }
    }
}

impl From<FieldMap> for Adapter {
    fn from(fields: FieldMap) -> Self {
        Self::new(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn row(value: Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            _ => panic!("test rows must be objects"),
        }
    }

    fn sample_adapter() -> Adapter {
        Adapter::new(FieldMap::from_table(
            "sample",
            &[
                ("Kepler ID", "kepid", FieldType::Integer),
                ("Period", "koi_period", FieldType::Float),
                ("KOI Name", "kepoi_name", FieldType::Text),
            ],
        ))
    }

    #[test]
    fn test_construction_adds_angular_separation() {
        let adapter = sample_adapter();
        assert_eq!(adapter.len(), 4);
        let spec = adapter.field_for(ANGULAR_SEPARATION_SOURCE).unwrap();
        assert_eq!(spec.target, ANGULAR_SEPARATION);
        assert_eq!(spec.field_type, FieldType::Float);
    }

    #[test]
    fn test_construction_overwrites_existing_angular_entry() {
        let adapter = Adapter::new(FieldMap::from_table(
            "custom",
            &[(ANGULAR_SEPARATION_SOURCE, "sep", FieldType::Text)],
        ));
        assert_eq!(adapter.len(), 1);
        assert_eq!(
            adapter.target_names().into_iter().collect::<Vec<_>>(),
            vec![ANGULAR_SEPARATION]
        );
    }

    #[test]
    fn test_construction_replaces_other_source_for_angular_target() {
        let adapter = Adapter::new(FieldMap::from_table(
            "custom",
            &[
                ("Separation", ANGULAR_SEPARATION, FieldType::Float),
                ("Sep", ANGULAR_SEPARATION, FieldType::Text),
                ("RA", "ra", FieldType::Float),
            ],
        ));
        assert_eq!(adapter.len(), 2);
        assert!(adapter.field_for("Separation").is_none());
        assert!(adapter.field_for("Sep").is_none());

        let record = adapter.apply(&row(json!({ "Ang Sep (')": "2.5" })));
        assert_eq!(record.float(ANGULAR_SEPARATION), Some(2.5));

        let adapted = adapter.apply_with_report(&row(json!({
            "Ang Sep (')": "2.5",
            "Sep": "x",
        })));
        assert_eq!(adapted.record.float(ANGULAR_SEPARATION), Some(2.5));
        assert_eq!(adapted.unrecognized, vec!["Sep"]);
    }

    #[test]
    fn test_apply_renames_and_coerces() {
        let adapter = sample_adapter();
        let record = adapter.apply(&row(json!({
            "Kepler ID": "757450",
            "Period": "8.884922",
            "KOI Name": "K00889.01",
        })));
        assert_eq!(record.integer("kepid"), Some(757_450));
        assert_eq!(record.float("koi_period"), Some(8.884_922));
        assert_eq!(record.text("kepoi_name"), Some("K00889.01"));
        assert!(record.is_null(ANGULAR_SEPARATION));
    }

    #[test]
    fn test_apply_empty_row_is_all_null() {
        let adapter = sample_adapter();
        let record = adapter.apply(&RawRecord::new());
        assert_eq!(record.len(), adapter.len());
        assert_eq!(record.null_count(), adapter.len());
    }

    #[test]
    fn test_failed_coercion_is_null() {
        let adapter = sample_adapter();
        let record = adapter.apply(&row(json!({
            "Kepler ID": "12.5",
            "Period": "not-a-number",
            "KOI Name": null,
        })));
        assert!(record.is_null("kepid"));
        assert!(record.is_null("koi_period"));
        assert!(record.is_null("kepoi_name"));
    }

    #[test]
    fn test_unrecognized_fields_are_reported_and_dropped() {
        let adapter = sample_adapter();
        let input = row(json!({
            "Kepler ID": 1,
            "Zeta": "z",
            "Alpha": "a",
        }));
        let adapted = adapter.apply_with_report(&input);
        assert_eq!(adapted.unrecognized, vec!["Alpha", "Zeta"]);
        assert!(!adapted.record.contains("Alpha"));
        assert!(!adapted.record.contains("Zeta"));
        assert_eq!(adapted.record.len(), adapter.len());
        // caller's row is untouched
        assert_eq!(input.len(), 3);
    }

    #[test]
    fn test_angular_separation_is_parsed() {
        let adapter = sample_adapter();
        let record = adapter.apply(&row(json!({ "Ang Sep (')": "2.5" })));
        assert_eq!(record.float(ANGULAR_SEPARATION), Some(2.5));
    }

    #[test]
    fn test_apply_all_preserves_order() {
        let adapter = sample_adapter();
        let rows = vec![
            row(json!({ "Kepler ID": "1" })),
            row(json!({ "Kepler ID": "2" })),
            row(json!({})),
        ];
        let records = adapter.apply_all(&rows);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].integer("kepid"), Some(1));
        assert_eq!(records[1].integer("kepid"), Some(2));
        assert!(records[2].is_null("kepid"));
    }

    #[test]
    fn test_repeated_calls_keep_schema() {
        let adapter = sample_adapter();
        let before = adapter.clone();
        let first = adapter.apply(&row(json!({ "Kepler ID": "1", "Extra": 1 })));
        let second = adapter.apply(&row(json!({ "Period": 3.5 })));
        assert_eq!(adapter, before);
        assert_eq!(
            first.names().collect::<Vec<_>>(),
            second.names().collect::<Vec<_>>()
        );
    }
}
