//! View-layer types for the heroes client.
//!
//! The collaborators the list view needs are traits, so a real front end
//! and a test harness can plug in their own:
//!
//! - [`Translator`]: Key to localized text, implemented by [`Catalog`]
//! - [`AlertSurface`]: Success/error notices, implemented by [`AlertLog`]
//! - [`ConfirmationSurface`]: Accept/decline prompts, implemented by [`AutoConfirm`]
//!
//! [`HeroListView`] ties them to a [`HeroService`](crate::heroes::HeroService).

mod alert;
mod confirm;
mod hero_list;
mod message;
mod translate;

pub use alert::{Alert, AlertKind, AlertLog, AlertSurface};
pub use confirm::{AutoConfirm, Confirmation, ConfirmationSurface};
pub use hero_list::{
    DeleteOutcome, HeroListView, ListState, ViewError, CONFIRM_DELETE_KEY, DELETE_ERR_KEY,
    DELETE_OK_KEY,
};
pub use message::{Message, MessageStatus, MessageType};
pub use translate::{Catalog, Translator};
