//! Catalog store.
//!
//! All catalogs are registered against a [`CatalogStoreBuilder`] during the
//! one-time load cycle at application start, then sealed into an immutable
//! [`CatalogStore`]. The sealed store is plain shared data: resolving keys
//! from any number of threads needs no locking because nothing mutates after
//! `build()`.

use std::collections::HashMap;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::schema::CatalogSchema;

/// Collects catalogs for one load cycle.
#[derive(Debug)]
pub struct CatalogStoreBuilder {
    default_locale: String,
    catalogs: HashMap<String, Catalog>,
}

impl CatalogStoreBuilder {
    /// Start a load cycle with the designated default locale.
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: default_locale.into(),
            catalogs: HashMap::new(),
        }
    }

    /// Register a catalog for its locale.
    ///
    /// Loading the same locale twice in one cycle is a configuration bug and
    /// fails with [`CatalogError::DuplicateLocale`].
    pub fn load(&mut self, catalog: Catalog) -> Result<(), CatalogError> {
        let locale = catalog.locale().to_string();
        if self.catalogs.contains_key(&locale) {
            return Err(CatalogError::DuplicateLocale { locale });
        }

        debug!(locale = %locale, keys = catalog.len(), "loaded catalog");
        self.catalogs.insert(locale, catalog);
        Ok(())
    }

    /// Seal the load cycle into an immutable store.
    ///
    /// Fails with [`CatalogError::MissingDefaultLocale`] if no catalog was
    /// loaded for the default locale, and with [`CatalogError::EmptyValue`]
    /// if any default-locale key maps to an empty string. Non-default
    /// catalogs are not checked here; structural drift is surfaced by
    /// [`validate`](crate::validate::validate) instead.
    pub fn build(self) -> Result<CatalogStore, CatalogError> {
        let Some(default_catalog) = self.catalogs.get(&self.default_locale) else {
            return Err(CatalogError::MissingDefaultLocale {
                locale: self.default_locale,
            });
        };

        let schema = CatalogSchema::from_catalog(default_catalog);
        // Schema order makes the first offending key deterministic.
        for key_path in schema.keys() {
            if default_catalog.get(key_path).is_some_and(|v| v.is_empty()) {
                return Err(CatalogError::EmptyValue {
                    key_path: key_path.to_string(),
                });
            }
        }

        Ok(CatalogStore {
            default_locale: self.default_locale,
            catalogs: self.catalogs,
            schema,
        })
    }
}

/// One catalog per supported locale, immutable after load.
#[derive(Debug)]
pub struct CatalogStore {
    default_locale: String,
    catalogs: HashMap<String, Catalog>,
    schema: CatalogSchema,
}

impl CatalogStore {
    /// Start a load cycle. Shorthand for [`CatalogStoreBuilder::new`].
    pub fn builder(default_locale: impl Into<String>) -> CatalogStoreBuilder {
        CatalogStoreBuilder::new(default_locale)
    }

    /// The catalog registered for a locale, if any.
    pub fn get(&self, locale: &str) -> Option<&Catalog> {
        self.catalogs.get(locale)
    }

    /// The designated default locale. Fixed at configuration time.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// The default locale's catalog. Guaranteed present by `build()`.
    pub fn default_catalog(&self) -> &Catalog {
        &self.catalogs[&self.default_locale]
    }

    /// All registered locales, sorted. For locale-switcher UI.
    pub fn available_locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.catalogs.keys().map(|s| s.as_str()).collect();
        locales.sort_unstable();
        locales
    }

    /// The key schema derived from the default catalog.
    pub fn schema(&self) -> &CatalogSchema {
        &self.schema
    }
}
