//! Normalized output records

use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A normalized record: internal field name to a coerced value or the null marker.
///
/// Keys are kept in name order so serialized output is stable. The null
/// marker and non-finite floats both serialize as JSON `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Option<FieldValue>>,
}

impl Record {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value
    pub fn insert(&mut self, name: impl Into<String>, value: Option<FieldValue>) -> &mut Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Value of a field, `None` when the field is absent or null
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name).and_then(Option::as_ref)
    }

    /// Whether the record carries this field at all (null or not)
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Whether the field is present and holds the null marker
    #[must_use]
    pub fn is_null(&self, name: &str) -> bool {
        matches!(self.fields.get(name), Some(None))
    }

    #[must_use]
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_i64)
    }

    #[must_use]
    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FieldValue::as_f64)
    }

    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }

    /// Field names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterate over `(name, value)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&FieldValue>)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    /// Number of fields, null or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields holding the null marker
    #[must_use]
    pub fn null_count(&self) -> usize {
        self.fields.values().filter(|value| value.is_none()).count()
    }
}

impl FromIterator<(String, Option<FieldValue>)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Option<FieldValue>)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Record {
        let mut record = Record::new();
        record
            .insert("kepid", Some(FieldValue::Integer(757_450)))
            .insert("koi_period", Some(FieldValue::Float(8.884_922)))
            .insert("kepoi_name", Some(FieldValue::Text("K00889.01".into())))
            .insert("koi_comment", None);
        record
    }

    #[test]
    fn test_typed_accessors() {
        let record = sample();
        assert_eq!(record.integer("kepid"), Some(757_450));
        assert_eq!(record.float("koi_period"), Some(8.884_922));
        assert_eq!(record.text("kepoi_name"), Some("K00889.01"));
        assert_eq!(record.integer("koi_period"), None);
    }

    #[test]
    fn test_null_versus_absent() {
        let record = sample();
        assert!(record.contains("koi_comment"));
        assert!(record.is_null("koi_comment"));
        assert!(record.get("koi_comment").is_none());

        assert!(!record.contains("koi_unknown"));
        assert!(!record.is_null("koi_unknown"));
        assert_eq!(record.null_count(), 1);
    }

    #[test]
    fn test_names_are_sorted() {
        let record = sample();
        let names: Vec<&str> = record.names().collect();
        assert_eq!(names, vec!["kepid", "kepoi_name", "koi_comment", "koi_period"]);
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn test_serialize_uses_json_null() {
        let record = sample();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["koi_comment"], json!(null));
        assert_eq!(value["kepid"], json!(757_450));
    }

    #[test]
    fn test_non_finite_floats_serialize_as_null() {
        let mut record = Record::new();
        record
            .insert("koi_depth", Some(FieldValue::Float(f64::NAN)))
            .insert("koi_prad", Some(FieldValue::Float(f64::INFINITY)));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({ "koi_depth": null, "koi_prad": null }));
    }

    #[test]
    fn test_from_iterator() {
        let record: Record = vec![
            ("a".to_string(), Some(FieldValue::Integer(1))),
            ("b".to_string(), None),
        ]
        .into_iter()
        .collect();
        assert_eq!(record.len(), 2);
        assert!(record.is_null("b"));
    }
}
