//! Lingo - localized string catalogs for the playout control UI
//!
//! Lingo maps stable key paths (`config.mailHelp`, `button.login`) to display
//! text for the active locale. Catalogs are loaded once at application start,
//! sealed into an immutable store, and resolved with a predictable fallback
//! to the default locale. A load-time validator surfaces key-set drift
//! between locales so authoring errors show up early instead of as blank UI.
//!
//! ## Module Structure
//!
//! - `builtin`: the shipped English (`en-GB`) catalog
//! - `catalog`: per-locale key path to string maps, built from nested JSON
//! - `error`: typed error kinds for loading and resolution
//! - `resolve`: key path lookup with default-locale fallback
//! - `schema`: the canonical key set, derived from the default catalog
//! - `store`: builder and immutable store, one catalog per locale
//! - `validate`: per-locale key-set diff against the schema
//!
//! ## Example
//!
//! ```
//! use lingo::{Catalog, CatalogStore, Resolver};
//!
//! let mut builder = CatalogStore::builder("en-GB");
//! builder.load(lingo::builtin::en_gb()?)?;
//! builder.load(Catalog::from_json_str(
//!     "de-DE",
//!     r#"{"button": {"login": "Anmelden"}}"#,
//! )?)?;
//! let store = builder.build()?;
//!
//! let resolver = Resolver::new(&store);
//! assert_eq!(resolver.resolve("button.login", "de-DE")?, "Anmelden");
//! // Untranslated keys fall back to the default locale.
//! assert_eq!(resolver.resolve("button.logout", "de-DE")?, "Logout");
//! # Ok::<(), lingo::CatalogError>(())
//! ```

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod resolve;
pub mod schema;
pub mod store;
pub mod validate;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use resolve::Resolver;
pub use schema::CatalogSchema;
pub use store::{CatalogStore, CatalogStoreBuilder};
pub use validate::{LocaleDelta, ValidationReport, validate};
