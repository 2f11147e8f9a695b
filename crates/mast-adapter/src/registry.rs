//! Named adapter registry
//!
//! Holds the built-in catalog adapters and any custom mappings loaded at
//! runtime. Lookups and registrations may happen from many threads.

use crate::adapter::Adapter;
use crate::catalogs::Catalog;
use crate::field_map::FieldMap;
use crate::{Error, Result};
use dashmap::DashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Concurrent registry of adapters by name
#[derive(Debug, Default)]
pub struct AdapterRegistry {
    adapters: DashMap<String, Arc<Adapter>>,
}

impl AdapterRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in catalog adapter
    #[must_use]
    pub fn with_builtin_catalogs() -> Self {
        let registry = Self::new();
        for catalog in Catalog::ALL {
            registry.register(catalog.name(), catalog.adapter().clone());
        }
        registry
    }

    /// Register an adapter, returning the one it replaced
    pub fn register(&self, name: impl Into<String>, adapter: Adapter) -> Option<Arc<Adapter>> {
        let name = name.into();
        debug!(adapter = %name, field_count = adapter.len(), "Registering adapter");
        self.adapters.insert(name, Arc::new(adapter))
    }

    /// Validate a mapping and register an adapter for it under the mapping's name
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMapping`] if the mapping fails validation.
    pub fn register_mapping(&self, mapping: FieldMap) -> Result<Arc<Adapter>> {
        mapping.validate()?;
        let name = mapping.name().to_string();
        let adapter = Arc::new(Adapter::new(mapping));
        if self.adapters.insert(name.clone(), Arc::clone(&adapter)).is_some() {
            info!(adapter = %name, "Replaced existing adapter");
        }
        Ok(adapter)
    }

    /// Load a YAML mapping file and register it
    ///
    /// # Errors
    ///
    /// Returns any error from [`FieldMap::parse_file`] or [`AdapterRegistry::register_mapping`].
    pub fn load_file(&self, path: &Path) -> Result<Arc<Adapter>> {
        let mapping = FieldMap::parse_file(path)?;
        info!(path = %path.display(), mapping = %mapping.name(), "Loaded mapping file");
        self.register_mapping(mapping)
    }

    /// Look up an adapter by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Adapter>> {
        self.adapters.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Look up an adapter by name, failing if it is not registered
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAdapter`] when no adapter has this name.
    pub fn require(&self, name: &str) -> Result<Arc<Adapter>> {
        self.get(name)
            .ok_or_else(|| Error::UnknownAdapter(name.to_string()))
    }

    /// Remove an adapter
    pub fn remove(&self, name: &str) -> Option<Arc<Adapter>> {
        self.adapters.remove(name).map(|(_, adapter)| adapter)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.adapters.contains_key(name)
    }

    /// Registered names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .adapters
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}
