//! The hero list view.
//!
//! [`HeroListView`] loads the hero collection and runs the delete flow:
//!
//! 1. Require a logged-in user
//! 2. Clear alerts and ask for confirmation with `heroes.confirmDeleteMsg`
//! 3. On accept, delete; then either re-fetch the list and show
//!    `heroes.deleteOkMsg`, or show `heroes.deleteErrMsg` and leave the
//!    list as it was
//!
//! The list is never edited locally; a successful delete is reflected by
//! re-fetching the whole collection.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use heroes_client::ui::{AlertLog, AutoConfirm, Catalog, DeleteOutcome, HeroListView};
//!
//! let mut view = HeroListView::new(
//!     Arc::new(service),
//!     sessions.clone(),
//!     Arc::new(AlertLog::new()),
//!     Arc::new(AutoConfirm::accepting()),
//!     Arc::new(Catalog::new("en")),
//! );
//!
//! view.init().await?;
//! assert_eq!(view.delete(11).await?, DeleteOutcome::Deleted);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::auth::SessionManager;
use crate::heroes::{Hero, HeroService, ServiceError};
use crate::ui::{AlertSurface, ConfirmationSurface, Message, Translator};

/// Confirmation prompt key.
pub const CONFIRM_DELETE_KEY: &str = "heroes.confirmDeleteMsg";

/// Successful delete key.
pub const DELETE_OK_KEY: &str = "heroes.deleteOkMsg";

/// Failed delete key.
pub const DELETE_ERR_KEY: &str = "heroes.deleteErrMsg";

/// Load state of the hero list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded.
    Loaded,
    /// The last fetch failed.
    Error,
}

/// How a delete request ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    /// The hero was deleted and the list re-fetched.
    Deleted,
    /// The delete was rejected or never reached the API.
    Failed {
        /// The HTTP status, or `None` on transport failure.
        status: Option<u16>,
    },
}

/// Errors from the list view.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Deleting requires a logged-in user.
    #[error("User must be logged in to delete heroes")]
    NotAuthenticated,

    /// The hero service failed.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// The hero list and its delete flow.
#[derive(Debug)]
pub struct HeroListView {
    service: Arc<dyn HeroService>,
    sessions: SessionManager,
    alerts: Arc<dyn AlertSurface>,
    confirmations: Arc<dyn ConfirmationSurface>,
    translator: Arc<dyn Translator>,
    heroes: Vec<Hero>,
    state: ListState,
}

// Verify HeroListView is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HeroListView>();
};

impl HeroListView {
    /// Creates a view over its collaborators. Nothing is fetched yet.
    #[must_use]
    pub fn new(
        service: Arc<dyn HeroService>,
        sessions: SessionManager,
        alerts: Arc<dyn AlertSurface>,
        confirmations: Arc<dyn ConfirmationSurface>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            service,
            sessions,
            alerts,
            confirmations,
            translator,
            heroes: Vec::new(),
            state: ListState::Idle,
        }
    }

    /// Returns the heroes from the last successful fetch.
    #[must_use]
    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// Returns the list load state.
    #[must_use]
    pub const fn state(&self) -> ListState {
        self.state
    }

    /// Fetches the full collection.
    ///
    /// Every call is a fresh round trip. On failure the previous list is
    /// kept and the state becomes [`ListState::Error`].
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Service`] if the fetch fails.
    pub async fn init(&mut self) -> Result<&[Hero], ViewError> {
        tracing::info!("initializing hero list");
        self.state = ListState::Loading;

        match self.service.find_all().await {
            Ok(heroes) => {
                self.heroes = heroes;
                self.state = ListState::Loaded;
                Ok(&self.heroes)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load heroes");
                self.state = ListState::Error;
                Err(e.into())
            }
        }
    }

    /// Asks for confirmation, then deletes hero `id`.
    ///
    /// # Errors
    ///
    /// - [`ViewError::NotAuthenticated`] if no user is logged in; nothing is
    ///   shown or sent
    /// - [`ViewError::Service`] if the delete succeeded but the re-fetch failed
    pub async fn delete(&mut self, id: u64) -> Result<DeleteOutcome, ViewError> {
        self.sessions
            .check_authentication()
            .map_err(|_| ViewError::NotAuthenticated)?;
        self.alerts.clear();

        let text = self.translator.get(CONFIRM_DELETE_KEY);
        let answer = self.confirmations.confirm(Message::confirm(text)).await;

        if !answer.is_accepted() {
            tracing::debug!(id, "delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        self.on_ok_delete(id).await
    }

    /// Deletes hero `id` without asking, then refreshes or alerts.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Service`] if the delete succeeded but the
    /// re-fetch failed. A rejected delete is reported as
    /// [`DeleteOutcome::Failed`], not as an error.
    pub async fn on_ok_delete(&mut self, id: u64) -> Result<DeleteOutcome, ViewError> {
        let failure = match self.service.delete(id).await {
            Ok(result) if result.ok => None,
            Ok(result) => Some(DeleteOutcome::Failed {
                status: Some(result.status),
            }),
            Err(e) => {
                tracing::warn!(id, error = %e, "delete request failed");
                Some(DeleteOutcome::Failed { status: None })
            }
        };

        if let Some(outcome) = failure {
            tracing::warn!(id, ?outcome, "hero not deleted");
            let text = self.translator.get(DELETE_ERR_KEY);
            self.alerts.error(DELETE_ERR_KEY, HashMap::new(), &text);
            return Ok(outcome);
        }

        tracing::info!(id, "hero deleted");
        let refreshed = self.init().await.map(|_| ());
        let text = self.translator.get(DELETE_OK_KEY);
        self.alerts.success(DELETE_OK_KEY, HashMap::new(), &text);
        refreshed?;
        Ok(DeleteOutcome::Deleted)
    }
}
