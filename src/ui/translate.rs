//! Translation lookup.
//!
//! [`Catalog`] holds per-language key/text tables. A key missing from the
//! current language falls back to the default language, then to the key
//! itself, so an untranslated key is still visible to the user.
//!
//! # Example
//!
//! ```rust
//! use heroes_client::ui::{Catalog, Translator};
//!
//! let catalog = Catalog::new("en")
//!     .with_entry("en", "heroes.deleteOkMsg", "Hero deleted")
//!     .with_entry("es", "heroes.deleteOkMsg", "Héroe eliminado");
//!
//! assert_eq!(catalog.get("heroes.deleteOkMsg"), "Hero deleted");
//! catalog.use_language("es");
//! assert_eq!(catalog.get("heroes.deleteOkMsg"), "Héroe eliminado");
//! assert_eq!(catalog.get("heroes.unknown"), "heroes.unknown");
//! ```

use std::collections::HashMap;
use std::fmt;

use parking_lot::RwLock;

/// Looks up localized text by key.
pub trait Translator: Send + Sync + fmt::Debug {
    /// Returns the text for `key` in the current language.
    fn get(&self, key: &str) -> String;
}

/// In-memory translation tables.
#[derive(Debug)]
pub struct Catalog {
    default_language: String,
    current: RwLock<String>,
    tables: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// Creates an empty catalog using `default_language`.
    #[must_use]
    pub fn new(default_language: impl Into<String>) -> Self {
        let default_language = default_language.into();
        Self {
            current: RwLock::new(default_language.clone()),
            default_language,
            tables: HashMap::new(),
        }
    }

    /// Adds one entry.
    #[must_use]
    pub fn with_entry(
        mut self,
        language: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.insert(language, key, text);
        self
    }

    /// Adds or replaces one entry.
    pub fn insert(
        &mut self,
        language: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.tables
            .entry(language.into())
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Switches the current language.
    pub fn use_language(&self, language: impl Into<String>) {
        *self.current.write() = language.into();
    }

    /// Returns the current language.
    #[must_use]
    pub fn current_language(&self) -> String {
        self.current.read().clone()
    }

    fn lookup(&self, language: &str, key: &str) -> Option<&String> {
        self.tables.get(language).and_then(|table| table.get(key))
    }
}

impl Translator for Catalog {
    fn get(&self, key: &str) -> String {
        let current = self.current.read();
        self.lookup(&current, key)
            .or_else(|| self.lookup(&self.default_language, key))
            .cloned()
            .unwrap_or_else(|| {
                tracing::debug!(key, language = current.as_str(), "missing translation");
                key.to_string()
            })
    }
}
