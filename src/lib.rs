//! # Heroes Client
//!
//! A Rust client for the heroes API: OAuth password grant login,
//! cookie-backed sessions, and a hero list view with a confirmed delete
//! flow.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ApiConfig`] and [`ApiConfigBuilder`]
//! - Validated newtypes for API credentials and the API base URL
//! - OAuth 2.0 password grant login via [`auth::oauth`]
//! - Cookie-backed session management via [`SessionManager`]
//! - An async HTTP client that attaches the session bearer token
//! - A hero data service via [`heroes`]
//! - The hero list view and its collaborators via [`ui`]
//!
//! ## Quick Start
//!
//! ```rust
//! use heroes_client::{ApiConfig, ApiEnv, ApiUrl, ClientId, ClientSecret};
//!
//! let config = ApiConfig::builder()
//!     .api_url(ApiUrl::new("http://localhost:3000/api").unwrap())
//!     .client_id(ClientId::new("heroes-web").unwrap())
//!     .client_secret(ClientSecret::new("heroes-secret").unwrap())
//!     .time_expired(1800)
//!     .api_env(ApiEnv::Dev)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.heroes_url(), "http://localhost:3000/api/heroes");
//! ```
//!
//! ## Logging In
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use heroes_client::auth::{oauth::gateway_for, MemoryCookieJar, SessionManager};
//!
//! let sessions = SessionManager::new(Arc::new(MemoryCookieJar::new()));
//! let gateway = gateway_for(&config, sessions.clone());
//!
//! gateway.login("fakeUserId", "fakePassword").await?;
//! assert_eq!(sessions.user_logged(), "fakeUserId");
//!
//! gateway.logout();
//! assert_eq!(sessions.token(), "");
//! ```
//!
//! ## Listing and Deleting Heroes
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use heroes_client::heroes::RestHeroService;
//! use heroes_client::ui::{AlertLog, AutoConfirm, Catalog, HeroListView};
//!
//! let mut view = HeroListView::new(
//!     Arc::new(RestHeroService::new(&config, sessions.clone())),
//!     sessions.clone(),
//!     Arc::new(AlertLog::new()),
//!     Arc::new(AutoConfirm::accepting()),
//!     Arc::new(Catalog::new(config.default_language())),
//! );
//!
//! view.init().await?;
//! view.delete(11).await?;
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber;
//! applications choose their own.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and sessions are instances passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod heroes;
pub mod ui;

// Re-export public types at crate root for convenience
pub use auth::{Session, SessionManager};
pub use config::{ApiConfig, ApiConfigBuilder, ApiEnv, ApiUrl, ClientId, ClientSecret};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export login types for convenience
pub use auth::oauth::{gateway_for, AuthError, AuthGateway, MockAuthGateway, OAuthGateway};
