//! Error types for catalog loading and resolution.

use thiserror::Error;

/// Failure kinds of the catalog component.
///
/// Load-time errors (`DuplicateLocale`, `MissingDefaultLocale`, `EmptyValue`,
/// `InvalidValue`, `Parse`) abort store construction. `MissingKey` is local to
/// a single lookup and leaves the store usable.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The same locale was loaded twice in one load cycle.
    #[error("locale `{locale}` was already loaded in this load cycle")]
    DuplicateLocale { locale: String },

    /// The designated default locale has no catalog at build time.
    #[error("no catalog loaded for the default locale `{locale}`")]
    MissingDefaultLocale { locale: String },

    /// A key in the default catalog maps to an empty string.
    #[error("key `{key_path}` in the default catalog has an empty value")]
    EmptyValue { key_path: String },

    /// A catalog document contains a non-string leaf.
    #[error("key `{key_path}` holds a {found} value, expected a string")]
    InvalidValue {
        key_path: String,
        found: &'static str,
    },

    /// The catalog document is not well-formed JSON.
    #[error("failed to parse catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The key is defined neither for the requested locale nor the default.
    #[error("key `{key_path}` is not defined for locale `{locale}` or the default locale")]
    MissingKey { key_path: String, locale: String },
}
