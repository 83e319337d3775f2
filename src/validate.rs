//! Load-time consistency validation.
//!
//! Compares every non-default catalog against the schema and reports the
//! symmetric difference per locale: keys the locale is missing (fallback
//! covers those at runtime) and keys it defines beyond the schema (drift,
//! usually a stale key that was removed from the default catalog).
//!
//! Validation is read-only and advisory. A partial catalog never blocks the
//! application from running; the resolver falls back key by key.

use serde::Serialize;
use tracing::{debug, warn};

use crate::store::CatalogStore;

/// Key-set difference of one locale against the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleDelta {
    pub locale: String,
    /// Present in the default catalog, absent here. Served by fallback.
    pub missing: Vec<String>,
    /// Present here, absent from the schema. Candidates for pruning.
    pub extra: Vec<String>,
}

impl LocaleDelta {
    /// True when the locale matches the schema exactly.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Validation result for one load cycle, one delta per non-default locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub deltas: Vec<LocaleDelta>,
}

impl ValidationReport {
    /// True when every registered locale is complete and drift-free.
    pub fn is_consistent(&self) -> bool {
        self.deltas.iter().all(LocaleDelta::is_clean)
    }

    /// The delta for one locale, if that locale was validated.
    pub fn delta(&self, locale: &str) -> Option<&LocaleDelta> {
        self.deltas.iter().find(|d| d.locale == locale)
    }
}

/// Validate every non-default catalog against the schema.
///
/// Extra keys are schema drift and logged as warnings; missing keys are
/// expected for partially translated locales and only logged at debug level.
/// Output ordering is deterministic: deltas sorted by locale, key lists
/// sorted within each delta.
pub fn validate(store: &CatalogStore) -> ValidationReport {
    let schema = store.schema();

    let mut deltas: Vec<LocaleDelta> = store
        .available_locales()
        .into_iter()
        .filter(|locale| *locale != store.default_locale())
        .filter_map(|locale| store.get(locale))
        .map(|catalog| {
            // Schema keys iterate sorted, so `missing` comes out sorted.
            let missing: Vec<String> = schema
                .keys()
                .filter(|key| !catalog.contains_key(key))
                .map(str::to_string)
                .collect();

            let mut extra: Vec<String> = catalog
                .keys()
                .filter(|key| !schema.contains(key))
                .map(str::to_string)
                .collect();
            extra.sort_unstable();

            LocaleDelta {
                locale: catalog.locale().to_string(),
                missing,
                extra,
            }
        })
        .collect();

    deltas.sort_by(|a, b| a.locale.cmp(&b.locale));

    for delta in &deltas {
        if !delta.extra.is_empty() {
            warn!(
                locale = %delta.locale,
                keys = ?delta.extra,
                "catalog defines keys outside the default schema"
            );
        }
        if !delta.missing.is_empty() {
            debug!(
                locale = %delta.locale,
                count = delta.missing.len(),
                "catalog is partial, fallback applies"
            );
        }
    }

    ValidationReport { deltas }
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
    fn complete_locale_is_clean() {
        let store = store_with(
            ("en-GB", r#"{"ok": "Ok", "button": {"save": "Save"}}"#),
            &[("de-DE", r#"{"ok": "Ok", "button": {"save": "Speichern"}}"#)],
        );

        let report = validate(&store);
        assert!(report.is_consistent());
        assert!(report.delta("de-DE").unwrap().is_clean());
    }

    #[test]
    fn missing_keys_are_reported_sorted() {
        let store = store_with(
            (
                "en-GB",
                r#"{"ok": "Ok", "user": {"name": "Username"}, "button": {"save": "Save"}}"#,
            ),
            &[("de-DE", r#"{"ok": "Ok"}"#)],
        );

        let report = validate(&store);
        let delta = report.delta("de-DE").unwrap();
        assert_eq!(delta.missing, vec!["button.save", "user.name"]);
        assert!(delta.extra.is_empty());
        assert!(!report.is_consistent());
    }

    #[test]
    fn extra_keys_are_schema_drift() {
        let store = store_with(
            ("en-GB", r#"{"ok": "Ok"}"#),
            &[("de-DE", r#"{"ok": "Ok", "obsolete": {"key": "Alt"}}"#)],
        );

        let report = validate(&store);
        let delta = report.delta("de-DE").unwrap();
        assert_eq!(delta.extra, vec!["obsolete.key"]);
        assert!(delta.missing.is_empty());
    }

    #[test]
    fn default_locale_is_not_validated() {
        let store = store_with(("en-GB", r#"{"ok": "Ok"}"#), &[]);

        let report = validate(&store);
        assert!(report.deltas.is_empty());
        assert!(report.is_consistent());
        assert!(report.delta("en-GB").is_none());
    }

    #[test]
    fn deltas_are_sorted_by_locale() {
        let store = store_with(
            ("en-GB", r#"{"ok": "Ok"}"#),
            &[
                ("fr-FR", r#"{"ok": "Ok"}"#),
                ("de-DE", r#"{"ok": "Ok"}"#),
            ],
        );

        let report = validate(&store);
        let locales: Vec<&str> = report.deltas.iter().map(|d| d.locale.as_str()).collect();
        assert_eq!(locales, vec!["de-DE", "fr-FR"]);
    }

    #[test]
    fn validation_does_not_affect_resolution() {
        let store = store_with(
            ("en-GB", r#"{"ok": "Ok"}"#),
            &[("de-DE", r#"{"stale": {"key": "Alt"}}"#)],
        );

        let report = validate(&store);
        assert!(!report.is_consistent());

        // Fallback still serves the partial locale.
        let resolver = crate::resolve::Resolver::new(&store);
        assert_eq!(resolver.resolve("ok", "de-DE").unwrap(), "Ok");
    }
}
