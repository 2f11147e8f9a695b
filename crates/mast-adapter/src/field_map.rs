//! Field mappings
//!
//! A [`FieldMap`] translates the column names a catalog publishes into
//! internal names with a declared type. Built-in maps come from static
//! tables; custom maps can be described in YAML:
//!
//! ```yaml
//! name: koi_subset
//! fields:
//!   - source: "Kepler ID"
//!     target: kepid
//!     type: integer
//!   - source: "Period"
//!     target: koi_period
//!     type: float
//! ```

use crate::{Error, Result};
use mast_record::FieldType;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::debug;

/// One mapped field: published name, internal name, declared type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name as published by the catalog service
    pub source: String,

    /// Internal field name
    pub target: String,

    /// Declared target type
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl FieldSpec {
    /// Create a field spec
    pub fn new(source: impl Into<String>, target: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            field_type,
        }
    }
}

/// A named association from published field name to [`FieldSpec`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    name: String,
    fields: BTreeMap<String, FieldSpec>,
}

/// On-disk shape of a mapping file
#[derive(Debug, Serialize, Deserialize)]
struct MappingFile {
    name: String,
    #[serde(default)]
    fields: Vec<FieldSpec>,
}

impl FieldMap {
    /// Create an empty mapping
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Build a mapping from a static `(source, target, type)` table
    #[must_use]
    pub fn from_table(name: &str, table: &[(&str, &str, FieldType)]) -> Self {
        let mut map = Self::new(name);
        for &(source, target, field_type) in table {
            map.insert(source, target, field_type);
        }
        map
    }

    /// Add or replace the entry for a published field name, returning the previous entry
    pub fn insert(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        field_type: FieldType,
    ) -> Option<FieldSpec> {
        let spec = FieldSpec::new(source, target, field_type);
        self.fields.insert(spec.source.clone(), spec)
    }

    /// Remove every entry producing this internal name, returning the removed entries
    pub fn remove_target(&mut self, target: &str) -> Vec<FieldSpec> {
        let sources: Vec<String> = self
            .fields
            .values()
            .filter(|spec| spec.target == target)
            .map(|spec| spec.source.clone())
            .collect();
        sources
            .iter()
            .filter_map(|source| self.fields.remove(source))
            .collect()
    }

    /// Mapping name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entry for a published field name
    #[must_use]
    pub fn get(&self, source: &str) -> Option<&FieldSpec> {
        self.fields.get(source)
    }

    /// Iterate over entries, ordered by published name
    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Set of internal names this mapping produces
    #[must_use]
    pub fn target_names(&self) -> BTreeSet<&str> {
        self.fields.values().map(|spec| spec.target.as_str()).collect()
    }

    /// Check that names are non-empty and no two entries share an internal name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMapping`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_mapping(&self.name, "mapping name is empty"));
        }

        let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
        for spec in self.fields.values() {
            if spec.source.is_empty() {
                return Err(Error::invalid_mapping(&self.name, "empty source field name"));
            }
            if spec.target.is_empty() {
                return Err(Error::invalid_mapping(
                    &self.name,
                    format!("empty target name for '{}'", spec.source),
                ));
            }
            if let Some(other) = seen.insert(&spec.target, &spec.source) {
                return Err(Error::invalid_mapping(
                    &self.name,
                    format!(
                        "target '{}' is produced by both '{}' and '{}'",
                        spec.target, other, spec.source
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Parse a mapping from YAML
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed YAML, [`Error::InvalidMapping`]
    /// when a source is listed twice or the mapping fails [`FieldMap::validate`].
    pub fn parse(yaml: &str) -> Result<Self> {
        let file: MappingFile = serde_yaml::from_str(yaml).map_err(|e| Error::Parse {
            message: e.to_string(),
            line: e.location().map(|l| l.line()),
            column: e.location().map(|l| l.column()),
        })?;

        let mut map = Self::new(file.name);
        for spec in file.fields {
            let source = spec.source.clone();
            if map.fields.insert(source.clone(), spec).is_some() {
                return Err(Error::invalid_mapping(
                    &map.name,
                    format!("source '{source}' is listed more than once"),
                ));
            }
        }
        map.validate()?;

        debug!(mapping = %map.name, field_count = map.len(), "Parsed field mapping");
        Ok(map)
    }

    /// Parse a mapping from a YAML file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise as [`FieldMap::parse`].
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Serialize the mapping to YAML
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        let file = MappingFile {
            name: self.name.clone(),
            fields: self.fields.values().cloned().collect(),
        };
        serde_yaml::to_string(&file).map_err(|e| Error::Parse {
            message: e.to_string(),
            line: None,
            column: None,
        })
    }
}
