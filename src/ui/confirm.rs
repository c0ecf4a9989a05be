//! Confirmation surface.
//!
//! A confirmation is an awaited answer rather than a callback: the caller
//! shows a [`Message`] and decides what to do with the returned
//! [`Confirmation`].

use std::fmt;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::ui::Message;

/// The user's answer to a confirmation prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirmation {
    /// The user accepted.
    Accepted,
    /// The user declined or dismissed the prompt.
    Declined,
}

impl Confirmation {
    /// Returns `true` for [`Confirmation::Accepted`].
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Something that can ask the user to confirm.
#[async_trait]
pub trait ConfirmationSurface: Send + Sync + fmt::Debug {
    /// Shows `message` and waits for the answer.
    async fn confirm(&self, message: Message) -> Confirmation;
}

/// [`ConfirmationSurface`] that always gives the same answer.
///
/// Shown messages are recorded.
///
/// # Example
///
/// ```rust
/// use heroes_client::ui::{AutoConfirm, Confirmation, ConfirmationSurface, Message};
///
/// # tokio_test::block_on(async {
/// let surface = AutoConfirm::declining();
/// let answer = surface.confirm(Message::confirm("Delete?")).await;
/// assert_eq!(answer, Confirmation::Declined);
/// assert_eq!(surface.shown().len(), 1);
/// # });
/// ```
#[derive(Debug)]
pub struct AutoConfirm {
    answer: Confirmation,
    shown: Mutex<Vec<Message>>,
}

impl AutoConfirm {
    /// Creates a surface answering `answer`.
    #[must_use]
    pub fn new(answer: Confirmation) -> Self {
        Self {
            answer,
            shown: Mutex::new(Vec::new()),
        }
    }

    /// Creates a surface that always accepts.
    #[must_use]
    pub fn accepting() -> Self {
        Self::new(Confirmation::Accepted)
    }

    /// Creates a surface that always declines.
    #[must_use]
    pub fn declining() -> Self {
        Self::new(Confirmation::Declined)
    }

    /// Returns the messages shown so far.
    #[must_use]
    pub fn shown(&self) -> Vec<Message> {
        self.shown.lock().clone()
    }
}

#[async_trait]
impl ConfirmationSurface for AutoConfirm {
    async fn confirm(&self, message: Message) -> Confirmation {
        self.shown.lock().push(message);
        self.answer
    }
}
