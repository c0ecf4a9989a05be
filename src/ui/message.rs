//! Messages shown by the confirmation surface.

use std::fmt;

/// Visual severity of a message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MessageStatus {
    /// Neutral information.
    #[default]
    Info,
    /// A completed action.
    Success,
    /// An action that needs attention, such as a destructive confirm.
    Warning,
    /// A failure.
    Danger,
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        };
        f.write_str(name)
    }
}

/// Whether a message only informs or asks for a decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MessageType {
    /// Dismiss-only.
    #[default]
    Alert,
    /// Accept or decline.
    Confirm,
}

/// A message for the user.
///
/// # Example
///
/// ```rust
/// use heroes_client::ui::{Message, MessageStatus, MessageType};
///
/// let message = Message::confirm("Delete this hero?");
/// assert_eq!(message.status, MessageStatus::Warning);
/// assert_eq!(message.kind, MessageType::Confirm);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Already-translated text.
    pub text: String,
    /// Severity.
    pub status: MessageStatus,
    /// Alert or confirm.
    pub kind: MessageType,
}

impl Message {
    /// Creates a message.
    #[must_use]
    pub fn new(text: impl Into<String>, status: MessageStatus, kind: MessageType) -> Self {
        Self {
            text: text.into(),
            status,
            kind,
        }
    }

    /// Creates a warning that asks for confirmation.
    #[must_use]
    pub fn confirm(text: impl Into<String>) -> Self {
        Self::new(text, MessageStatus::Warning, MessageType::Confirm)
    }

    /// Returns `true` if the message expects a decision.
    #[must_use]
    pub const fn needs_decision(&self) -> bool {
        matches!(self.kind, MessageType::Confirm)
    }
}
