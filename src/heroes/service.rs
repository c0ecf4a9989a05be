//! Hero data service.
//!
//! [`HeroService`] is the CRUD seam the list view talks to.
//! [`RestHeroService`] implements it over the heroes REST resource:
//!
//! | Operation  | Request                 |
//! |------------|-------------------------|
//! | `find_all` | `GET {heroes}`          |
//! | `find`     | `GET {heroes}/{id}`     |
//! | `create`   | `POST {heroes}`         |
//! | `update`   | `PUT {heroes}/{id}`     |
//! | `delete`   | `DELETE {heroes}/{id}`  |
//!
//! Every call is a fresh round trip carrying the session bearer token when
//! one is stored. Nothing is cached.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::auth::SessionManager;
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::ApiConfig;
use crate::heroes::{Hero, ServiceError};

/// Outcome of a delete call.
///
/// A non-2xx answer is not an error here; callers branch on `ok`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceResult {
    /// `true` for a 2xx status.
    pub ok: bool,
    /// The HTTP status code.
    pub status: u16,
}

impl ServiceResult {
    /// Builds the result for an HTTP status code.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        Self {
            ok: status >= 200 && status < 300,
            status,
        }
    }
}

impl From<&HttpResponse> for ServiceResult {
    fn from(response: &HttpResponse) -> Self {
        Self::from_status(response.code)
    }
}

/// CRUD operations on heroes.
#[async_trait]
pub trait HeroService: Send + Sync + fmt::Debug {
    /// Fetches the full collection.
    async fn find_all(&self) -> Result<Vec<Hero>, ServiceError>;

    /// Fetches one hero.
    async fn find(&self, id: u64) -> Result<Hero, ServiceError>;

    /// Creates a hero with `name`, returning the stored record.
    async fn create(&self, name: &str) -> Result<Hero, ServiceError>;

    /// Replaces a hero, returning the stored record.
    async fn update(&self, hero: &Hero) -> Result<Hero, ServiceError>;

    /// Deletes a hero.
    ///
    /// # Errors
    ///
    /// Only transport failures are errors; HTTP statuses are reported
    /// through [`ServiceResult::ok`].
    async fn delete(&self, id: u64) -> Result<ServiceResult, ServiceError>;
}

/// [`HeroService`] backed by the heroes REST resource.
///
/// # Example
///
/// ```rust,ignore
/// use heroes_client::heroes::{HeroService, RestHeroService};
///
/// let service = RestHeroService::new(&config, sessions.clone());
/// let heroes = service.find_all().await?;
/// ```
#[derive(Debug)]
pub struct RestHeroService {
    base_url: String,
    http: HttpClient,
}

// Verify RestHeroService is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestHeroService>();
};

impl RestHeroService {
    /// Creates a service for the configured heroes resource.
    #[must_use]
    pub fn new(config: &ApiConfig, sessions: SessionManager) -> Self {
        Self {
            base_url: config.heroes_url(),
            http: HttpClient::new(config, Some(sessions)),
        }
    }

    /// Returns the collection URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/{id}", self.base_url)
    }

    fn not_found(error: HttpError, id: u64) -> ServiceError {
        match error {
            HttpError::Response(ref response) if response.code == 404 => {
                ServiceError::NotFound { id }
            }
            other => ServiceError::Http(other),
        }
    }
}

#[async_trait]
impl HeroService for RestHeroService {
    async fn find_all(&self) -> Result<Vec<Hero>, ServiceError> {
        let request = HttpRequest::builder(HttpMethod::Get, &self.base_url).build()?;
        let response = self.http.request(request).await?;
        let heroes: Vec<Hero> = serde_json::from_value(response.body)?;
        tracing::debug!(count = heroes.len(), "fetched heroes");
        Ok(heroes)
    }

    async fn find(&self, id: u64) -> Result<Hero, ServiceError> {
        let request = HttpRequest::builder(HttpMethod::Get, self.item_url(id)).build()?;
        let response = self
            .http
            .request(request)
            .await
            .map_err(|e| Self::not_found(e, id))?;
        Ok(serde_json::from_value(response.body)?)
    }

    async fn create(&self, name: &str) -> Result<Hero, ServiceError> {
        let request = HttpRequest::builder(HttpMethod::Post, &self.base_url)
            .json(serde_json::json!({ "name": name }))
            .build()?;
        let response = self.http.request(request).await?;
        let hero: Hero = serde_json::from_value(response.body)?;
        tracing::info!(id = hero.id, "hero created");
        Ok(hero)
    }

    async fn update(&self, hero: &Hero) -> Result<Hero, ServiceError> {
        let request = HttpRequest::builder(HttpMethod::Put, self.item_url(hero.id))
            .json(serde_json::to_value(hero)?)
            .build()?;
        let response = self
            .http
            .request(request)
            .await
            .map_err(|e| Self::not_found(e, hero.id))?;

        // 204 and empty bodies decode to `{}`
        match response.body {
            Value::Object(ref map) if map.is_empty() => Ok(hero.clone()),
            body => Ok(serde_json::from_value(body)?),
        }
    }

    async fn delete(&self, id: u64) -> Result<ServiceResult, ServiceError> {
        let request = HttpRequest::builder(HttpMethod::Delete, self.item_url(id)).build()?;
        let response = self.http.send(request).await?;
        let result = ServiceResult::from(&response);
        tracing::debug!(id, status = result.status, "delete answered");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryCookieJar;
    use crate::config::{ApiUrl, ClientId, ClientSecret};
    use std::sync::Arc;

    fn service(api_url: &str) -> RestHeroService {
        let config = ApiConfig::builder()
            .api_url(ApiUrl::new(api_url).unwrap())
            .client_id(ClientId::new("client").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .build()
            .unwrap();
        RestHeroService::new(&config, SessionManager::new(Arc::new(MemoryCookieJar::new())))
    }

    #[test]
    fn test_service_result_from_status() {
        assert!(ServiceResult::from_status(200).ok);
        assert!(ServiceResult::from_status(204).ok);
        assert!(!ServiceResult::from_status(404).ok);
        assert!(!ServiceResult::from_status(500).ok);
        assert!(!ServiceResult::from_status(302).ok);
    }

    #[test]
    fn test_urls_built_from_config() {
        let service = service("http://localhost:3000/api");
        assert_eq!(service.base_url(), "http://localhost:3000/api/heroes");
        assert_eq!(service.item_url(7), "http://localhost:3000/api/heroes/7");
    }

    #[test]
    fn test_not_found_maps_only_404() {
        let not_found = HttpError::Response(crate::clients::HttpResponseError {
            code: 404,
            message: "{}".to_string(),
            error_reference: None,
        });
        assert!(matches!(
            RestHeroService::not_found(not_found, 9),
            ServiceError::NotFound { id: 9 }
        ));

        let server_error = HttpError::Response(crate::clients::HttpResponseError {
            code: 500,
            message: "{}".to_string(),
            error_reference: None,
        });
        assert!(matches!(
            RestHeroService::not_found(server_error, 9),
            ServiceError::Http(_)
        ));
    }
}
