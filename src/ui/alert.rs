//! Alert surface.
//!
//! Alerts are the toast-style notices shown after an action completes.
//! [`AlertLog`] keeps them in memory, which is what headless callers and
//! tests use.

use std::collections::HashMap;
use std::fmt;

use parking_lot::Mutex;

/// Success or error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlertKind {
    /// The action completed.
    Success,
    /// The action failed.
    Error,
}

/// A shown alert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    /// Success or error.
    pub kind: AlertKind,
    /// The translation key the text came from.
    pub key: String,
    /// Interpolation parameters for the key.
    pub params: HashMap<String, String>,
    /// The displayed text.
    pub text: String,
}

/// Somewhere alerts are displayed.
pub trait AlertSurface: Send + Sync + fmt::Debug {
    /// Shows a success alert.
    fn success(&self, key: &str, params: HashMap<String, String>, text: &str);

    /// Shows an error alert.
    fn error(&self, key: &str, params: HashMap<String, String>, text: &str);

    /// Removes every alert.
    fn clear(&self);
}

/// [`AlertSurface`] that records alerts in memory.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use heroes_client::ui::{AlertKind, AlertLog, AlertSurface};
///
/// let alerts = AlertLog::new();
/// alerts.error("heroes.deleteErrMsg", HashMap::new(), "Could not delete");
///
/// let last = alerts.last().unwrap();
/// assert_eq!(last.kind, AlertKind::Error);
/// assert_eq!(last.text, "Could not delete");
/// ```
#[derive(Debug, Default)]
pub struct AlertLog {
    alerts: Mutex<Vec<Alert>>,
}

impl AlertLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the alerts currently shown, oldest first.
    #[must_use]
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().clone()
    }

    /// Returns the most recent alert.
    #[must_use]
    pub fn last(&self) -> Option<Alert> {
        self.alerts.lock().last().cloned()
    }

    /// Returns `true` if no alert is shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alerts.lock().is_empty()
    }

    fn push(&self, kind: AlertKind, key: &str, params: HashMap<String, String>, text: &str) {
        self.alerts.lock().push(Alert {
            kind,
            key: key.to_string(),
            params,
            text: text.to_string(),
        });
    }
}

impl AlertSurface for AlertLog {
    fn success(&self, key: &str, params: HashMap<String, String>, text: &str) {
        tracing::info!(key, text, "success alert");
        self.push(AlertKind::Success, key, params, text);
    }

    fn error(&self, key: &str, params: HashMap<String, String>, text: &str) {
        tracing::warn!(key, text, "error alert");
        self.push(AlertKind::Error, key, params, text);
    }

    fn clear(&self) {
        self.alerts.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order_and_clears() {
        let log = AlertLog::new();
        log.success("a", HashMap::new(), "A");
        log.error("b", HashMap::new(), "B");

        let alerts = log.alerts();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].kind, AlertKind::Success);
        assert_eq!(alerts[1].key, "b");

        log.clear();
        assert!(log.is_empty());
        assert!(log.last().is_none());
    }
}
