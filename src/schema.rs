//! Catalog schema.
//!
//! The schema is the closed set of key paths every locale is measured
//! against. It is not authored separately: it is derived from the default
//! locale's catalog when the store is sealed, so the default catalog is the
//! single source of truth for which keys exist.

use std::collections::BTreeSet;

use crate::catalog::Catalog;

/// The canonical key set, derived from the default locale's catalog.
#[derive(Debug, Clone)]
pub struct CatalogSchema {
    keys: BTreeSet<String>,
}

impl CatalogSchema {
    pub(crate) fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            keys: catalog.keys().map(str::to_string).collect(),
        }
    }

    /// Check if a key path belongs to the schema.
    pub fn contains(&self, key_path: &str) -> bool {
        self.keys.contains(key_path)
    }

    /// All key paths, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|s| s.as_str())
    }

    /// The namespaces of the schema: the first segment of every nested key
    /// path. Top-level leaves like `ok` or `cancel` are not namespaces.
    pub fn namespaces(&self) -> BTreeSet<&str> {
        self.keys
            .iter()
            .filter_map(|key| {
                key.split_once('.').map(|(namespace, _)| namespace)
            })
            .collect()
    }

    /// Number of key paths in the schema.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the schema is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
