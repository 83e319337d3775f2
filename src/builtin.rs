//! The shipped default catalog.
//!
//! The stock deployment ships one catalog, British English, embedded at
//! compile time. Deployments with more locales load them through the same
//! builder before sealing the store.

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::store::CatalogStore;

/// Locale tag of the shipped catalog.
pub const DEFAULT_LOCALE: &str = "en-GB";

/// The raw English control-UI catalog.
pub const EN_GB: &str = include_str!("../locales/en-GB.json");

/// Parse the shipped English catalog.
pub fn en_gb() -> Result<Catalog, CatalogError> {
    Catalog::from_json_str(DEFAULT_LOCALE, EN_GB)
}

/// A store seeded with the shipped English catalog as default locale.
pub fn default_store() -> Result<CatalogStore, CatalogError> {
    let mut builder = CatalogStore::builder(DEFAULT_LOCALE);
    builder.load(en_gb()?)?;
    builder.build()
}
