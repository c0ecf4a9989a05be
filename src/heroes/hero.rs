//! The hero record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A hero as returned by the heroes API.
///
/// Only `id` and `name` are interpreted; any other fields are kept in
/// `extra` and sent back unchanged on update.
///
/// # Example
///
/// ```rust
/// use heroes_client::heroes::Hero;
///
/// let hero: Hero = serde_json::from_str(r#"{"id": 11, "name": "Narco", "power": "flight"}"#).unwrap();
/// assert_eq!(hero.id, 11);
/// assert_eq!(hero.extra.get("power").and_then(|v| v.as_str()), Some("flight"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    /// The hero identifier.
    pub id: u64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Remaining fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Hero {
    /// Creates a hero with no extra fields.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: Map::new(),
        }
    }
}
