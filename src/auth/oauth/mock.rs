//! Offline gateway for the `mock` environment.

use async_trait::async_trait;

use crate::auth::oauth::{establish_session, AuthError, AuthGateway};
use crate::auth::{SessionManager, TokenResponse};

/// Gateway that grants a fixed token without any network traffic.
///
/// Any username and password are accepted. The session is written exactly
/// as [`super::OAuthGateway`] would write it.
#[derive(Clone, Debug)]
pub struct MockAuthGateway {
    time_expired: i64,
    sessions: SessionManager,
}

impl MockAuthGateway {
    /// Creates a mock gateway whose tokens last `time_expired` seconds.
    #[must_use]
    pub const fn new(time_expired: i64, sessions: SessionManager) -> Self {
        Self {
            time_expired,
            sessions,
        }
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn login(&self, username: &str, _password: &str) -> Result<TokenResponse, AuthError> {
        tracing::debug!(user = username, "mock login");
        establish_session(
            &self.sessions,
            username,
            TokenResponse::mock(self.time_expired),
            self.time_expired,
        )
    }

    fn logout(&self) {
        self.sessions.clear_cookies();
        tracing::info!("logged out");
    }

    fn sessions(&self) -> &SessionManager {
        &self.sessions
    }
}
