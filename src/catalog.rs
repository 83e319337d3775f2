//! Locale catalogs.
//!
//! A [`Catalog`] holds all display strings for one locale, keyed by dotted
//! key path (`config.mailHelp`). Catalogs are built once from a nested
//! document and never mutated afterwards; any dynamic content is assembled
//! by the caller around the resolved string.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::CatalogError;

/// All display strings for a single locale, flattened to dotted key paths.
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: String,
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Parse a catalog from a JSON document.
    ///
    /// The document must be a nested object whose leaves are all strings:
    /// namespace objects may nest arbitrarily deep, but numbers, booleans,
    /// arrays and null are rejected with [`CatalogError::InvalidValue`].
    pub fn from_json_str(locale: impl Into<String>, src: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(src)?;
        Self::from_value(locale, &value)
    }

    /// Build a catalog from an already-deserialized document.
    ///
    /// Loaders that read other structured formats (YAML, TOML, ...) can
    /// convert to a [`Value`] and feed it here; this crate performs no file
    /// or network I/O itself.
    pub fn from_value(locale: impl Into<String>, value: &Value) -> Result<Self, CatalogError> {
        if !value.is_object() {
            return Err(CatalogError::InvalidValue {
                key_path: String::new(),
                found: json_type_name(value),
            });
        }

        let mut entries = HashMap::new();
        flatten_value(value, String::new(), &mut entries)?;
        Ok(Self {
            locale: locale.into(),
            entries,
        })
    }

    /// The locale tag this catalog belongs to.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Look up a string by its exact key path.
    pub fn get(&self, key_path: &str) -> Option<&str> {
        self.entries.get(key_path).map(|s| s.as_str())
    }

    /// Check if a key path is defined.
    pub fn contains_key(&self, key_path: &str) -> bool {
        self.entries.contains_key(key_path)
    }

    /// All defined key paths, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Number of defined key paths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog defines no keys at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Flatten a nested object into dotted key paths.
///
/// `{"config": {"mail": "Email"}}` becomes `config.mail = "Email"`.
fn flatten_value(
    value: &Value,
    prefix: String,
    entries: &mut HashMap<String, String>,
) -> Result<(), CatalogError> {
    match value {
        Value::Object(map) => {
            if map.is_empty() && !prefix.is_empty() {
                return Err(CatalogError::InvalidValue {
                    key_path: prefix,
                    found: "empty object",
                });
            }
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_value(val, new_prefix, entries)?;
            }
            Ok(())
        }
        Value::String(s) => {
            entries.insert(prefix, s.clone());
            Ok(())
        }
        other => Err(CatalogError::InvalidValue {
            key_path: prefix,
            found: json_type_name(other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
