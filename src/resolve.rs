//! Key resolution.
//!
//! The resolver is the lookup interface handed to the UI layer. It borrows
//! the sealed store and owns nothing; resolution is a pure function of the
//! key path, the active locale and the store contents, so no caching layer
//! sits in between.

use crate::error::CatalogError;
use crate::store::CatalogStore;

/// Resolves key paths against a sealed [`CatalogStore`].
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    store: &'a CatalogStore,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    /// Resolve a key path for the active locale.
    ///
    /// Lookup order:
    /// 1. the active locale's catalog, if registered and it defines the key;
    /// 2. the default locale's catalog (fallback);
    /// 3. [`CatalogError::MissingKey`] — never a silent empty string, so
    ///    "not yet translated" and "not defined anywhere" stay
    ///    distinguishable.
    ///
    /// Key paths match exactly; there is no prefix or wildcard matching.
    pub fn resolve(&self, key_path: &str, locale: &str) -> Result<&'a str, CatalogError> {
        if let Some(catalog) = self.store.get(locale)
            && let Some(value) = catalog.get(key_path)
        {
            return Ok(value);
        }

        if let Some(value) = self.store.default_catalog().get(key_path) {
            return Ok(value);
        }

        Err(CatalogError::MissingKey {
            key_path: key_path.to_string(),
            locale: locale.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::Catalog;

    fn store_with(default: (&str, &str), others: &[(&str, &str)]) -> CatalogStore {
        let mut builder = CatalogStore::builder(default.0);
        builder
            .load(Catalog::from_json_str(default.0, default.1).unwrap())
            .unwrap();
        for (locale, src) in others {
            builder
                .load(Catalog::from_json_str(*locale, src).unwrap())
                .unwrap();
        }
        builder.build().unwrap()
    }

    #[test]
    fn active_locale_wins() {
        let store = store_with(
            ("en-GB", r#"{"button": {"login": "Login"}}"#),
            &[("de-DE", r#"{"button": {"login": "Anmelden"}}"#)],
        );
        let resolver = Resolver::new(&store);

        assert_eq!(resolver.resolve("button.login", "de-DE").unwrap(), "Anmelden");
    }

    #[test]
    fn falls_back_to_default_for_missing_key() {
        let store = store_with(
            ("en-GB", r#"{"button": {"login": "Login", "logout": "Logout"}}"#),
            &[("de-DE", r#"{"button": {"login": "Anmelden"}}"#)],
        );
        let resolver = Resolver::new(&store);

        assert_eq!(resolver.resolve("button.logout", "de-DE").unwrap(), "Logout");
    }

    #[test]
    fn falls_back_to_default_for_unregistered_locale() {
        let store = store_with(("en-GB", r#"{"ok": "Ok"}"#), &[]);
        let resolver = Resolver::new(&store);

        assert_eq!(resolver.resolve("ok", "fr-FR").unwrap(), "Ok");
    }

    #[test]
    fn missing_everywhere_is_an_error() {
        let store = store_with(("en-GB", r#"{"ok": "Ok"}"#), &[]);
        let resolver = Resolver::new(&store);

        let err = resolver.resolve("does.not.exist", "en-GB").unwrap_err();
        match err {
            CatalogError::MissingKey { key_path, locale } => {
                assert_eq!(key_path, "does.not.exist");
                assert_eq!(locale, "en-GB");
            }
            other => panic!("expected MissingKey, got {other:?}"),
        }
    }

    #[test]
    fn no_prefix_matching() {
        let store = store_with(("en-GB", r#"{"config": {"mail": "Email"}}"#), &[]);
        let resolver = Resolver::new(&store);

        assert!(resolver.resolve("config", "en-GB").is_err());
        assert!(resolver.resolve("config.mail.help", "en-GB").is_err());
    }

    #[test]
    fn resolution_is_idempotent() {
        let store = store_with(
            ("en-GB", r#"{"ok": "Ok"}"#),
            &[("de-DE", r#"{"cancel": "Abbrechen"}"#)],
        );
        let resolver = Resolver::new(&store);

        let first = resolver.resolve("ok", "de-DE").unwrap();
        let second = resolver.resolve("ok", "de-DE").unwrap();
        assert_eq!(first, second);
    }
}
