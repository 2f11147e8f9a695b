//! Built-in catalog adapters
//!
//! One adapter per result shape the MAST Kepler/K2 services return. Each is
//! built on first use and shared for the life of the process.

use crate::adapter::Adapter;
use crate::field_map::FieldMap;
use crate::tables::{
    DATASET_FIELDS, EPIC_FIELDS, K2_DATASET_FIELDS, KOI_FIELDS, PLANET_FIELDS, STAR_FIELDS,
    TARGET_FIELDS,
};
use crate::Error;
use mast_record::FieldType;
use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;

/// Kepler Objects of Interest (planet candidates)
pub static KOI_ADAPTER: Lazy<Adapter> = Lazy::new(|| Catalog::Koi.build());

/// Confirmed planets
pub static PLANET_ADAPTER: Lazy<Adapter> = Lazy::new(|| Catalog::Planet.build());

/// Kepler Input Catalog stars
pub static STAR_ADAPTER: Lazy<Adapter> = Lazy::new(|| Catalog::Star.build());

/// Kepler science datasets
pub static DATASET_ADAPTER: Lazy<Adapter> = Lazy::new(|| Catalog::Dataset.build());

/// K2 Ecliptic Plane Input Catalog
pub static EPIC_ADAPTER: Lazy<Adapter> = Lazy::new(|| Catalog::Epic.build());

/// K2 campaign datasets
pub static K2_DATASET_ADAPTER: Lazy<Adapter> = Lazy::new(|| Catalog::K2Dataset.build());

/// Kepler target focal-plane positions
pub static TARGET_ADAPTER: Lazy<Adapter> = Lazy::new(|| Catalog::Target.build());

/// The catalog result shapes with a built-in adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Catalog {
    Koi,
    Planet,
    Star,
    Dataset,
    Epic,
    K2Dataset,
    Target,
}

impl Catalog {
    /// Every built-in catalog
    pub const ALL: [Catalog; 7] = [
        Catalog::Koi,
        Catalog::Planet,
        Catalog::Star,
        Catalog::Dataset,
        Catalog::Epic,
        Catalog::K2Dataset,
        Catalog::Target,
    ];

    /// Registry name of the catalog
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Catalog::Koi => "koi",
            Catalog::Planet => "planet",
            Catalog::Star => "star",
            Catalog::Dataset => "dataset",
            Catalog::Epic => "epic",
            Catalog::K2Dataset => "k2_dataset",
            Catalog::Target => "target",
        }
    }

    /// Published field table, without the angular separation entry
    #[must_use]
    pub fn fields(self) -> &'static [(&'static str, &'static str, FieldType)] {
        match self {
            Catalog::Koi => KOI_FIELDS,
            Catalog::Planet => PLANET_FIELDS,
            Catalog::Star => STAR_FIELDS,
            Catalog::Dataset => DATASET_FIELDS,
            Catalog::Epic => EPIC_FIELDS,
            Catalog::K2Dataset => K2_DATASET_FIELDS,
            Catalog::Target => TARGET_FIELDS,
        }
    }

    /// The shared adapter for this catalog
    #[must_use]
    pub fn adapter(self) -> &'static Adapter {
        match self {
            Catalog::Koi => &*KOI_ADAPTER,
            Catalog::Planet => &*PLANET_ADAPTER,
            Catalog::Star => &*STAR_ADAPTER,
            Catalog::Dataset => &*DATASET_ADAPTER,
            Catalog::Epic => &*EPIC_ADAPTER,
            Catalog::K2Dataset => &*K2_DATASET_ADAPTER,
            Catalog::Target => &*TARGET_ADAPTER,
        }
    }

    /// Field mapping for this catalog, as loaded into its adapter
    #[must_use]
    pub fn field_map(self) -> FieldMap {
        FieldMap::from_table(self.name(), self.fields())
    }

    fn build(self) -> Adapter {
        Adapter::new(self.field_map())
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Catalog {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Catalog::ALL
            .into_iter()
            .find(|catalog| catalog.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownCatalog(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{ANGULAR_SEPARATION, ANGULAR_SEPARATION_SOURCE};
    use std::collections::BTreeSet;

    #[test]
    fn test_table_sizes() {
        assert_eq!(KOI_FIELDS.len(), 141);
        assert_eq!(PLANET_FIELDS.len(), 44);
        assert_eq!(STAR_FIELDS.len(), 44);
        assert_eq!(DATASET_FIELDS.len(), 66);
        assert_eq!(EPIC_FIELDS.len(), 65);
        assert_eq!(K2_DATASET_FIELDS.len(), 59);
        assert_eq!(TARGET_FIELDS.len(), 23);
    }

    #[test]
    fn test_tables_have_unique_names() {
        for catalog in Catalog::ALL {
            let fields = catalog.fields();
            let sources: BTreeSet<&str> = fields.iter().map(|&(s, _, _)| s).collect();
            let targets: BTreeSet<&str> = fields.iter().map(|&(_, t, _)| t).collect();
            assert_eq!(sources.len(), fields.len(), "duplicate source in {catalog}");
            assert_eq!(targets.len(), fields.len(), "duplicate target in {catalog}");
            assert!(!targets.contains(ANGULAR_SEPARATION), "{catalog}");
            assert!(!sources.contains(ANGULAR_SEPARATION_SOURCE), "{catalog}");
        }
    }

    #[test]
    fn test_adapters_include_angular_separation() {
        for catalog in Catalog::ALL {
            let adapter = catalog.adapter();
            assert_eq!(adapter.len(), catalog.fields().len() + 1);
            assert!(adapter.target_names().contains(ANGULAR_SEPARATION));
            assert_eq!(adapter.name(), catalog.name());
            assert!(adapter.field_map().validate().is_ok());
        }
    }

    #[test]
    fn test_catalog_from_str() {
        assert_eq!("koi".parse::<Catalog>().unwrap(), Catalog::Koi);
        assert_eq!(" K2_Dataset ".parse::<Catalog>().unwrap(), Catalog::K2Dataset);
        assert!(matches!(
            "exoplanets".parse::<Catalog>(),
            Err(Error::UnknownCatalog(_))
        ));
    }

    #[test]
    fn test_catalog_names_round_trip() {
        for catalog in Catalog::ALL {
            assert_eq!(catalog.to_string().parse::<Catalog>().unwrap(), catalog);
        }
    }

    #[test]
    fn test_shared_adapter_is_same_instance() {
        assert!(std::ptr::eq(Catalog::Star.adapter(), &*STAR_ADAPTER));
    }
}
