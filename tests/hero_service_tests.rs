//! Integration tests for the REST hero service.

use std::sync::Arc;

use heroes_client::auth::{MemoryCookieJar, SessionManager};
use heroes_client::heroes::{Hero, HeroService, RestHeroService, ServiceError};
use heroes_client::{ApiConfig, ApiUrl, ClientId, ClientSecret, HttpError};
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_service(server: &MockServer, sessions: SessionManager) -> RestHeroService {
    let config = ApiConfig::builder()
        .api_url(ApiUrl::new(&format!("{}/api", server.uri())).unwrap())
        .client_id(ClientId::new("heroes-web").unwrap())
        .client_secret(ClientSecret::new("heroes-secret").unwrap())
        .build()
        .unwrap();
    RestHeroService::new(&config, sessions)
}

fn logged_in() -> SessionManager {
    let sessions = SessionManager::new(Arc::new(MemoryCookieJar::new()));
    sessions.store_session("fakeUserId", "abc", 60);
    sessions
}

fn anonymous() -> SessionManager {
    SessionManager::new(Arc::new(MemoryCookieJar::new()))
}

#[tokio::test]
async fn test_find_all_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/heroes"))
        .and(header("Authorization", "Bearer abc"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 11, "name": "Narco"},
            {"id": 12, "name": "Bombasto", "power": "strength"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = create_service(&mock_server, logged_in());
    let heroes = service.find_all().await.unwrap();

    assert_eq!(heroes.len(), 2);
    assert_eq!(heroes[0], Hero::new(11, "Narco"));
    assert_eq!(
        heroes[1].extra.get("power"),
        Some(&serde_json::json!("strength"))
    );
}

#[tokio::test]
async fn test_requests_without_session_carry_no_authorization() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/heroes"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(400))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/heroes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = create_service(&mock_server, anonymous());
    assert!(service.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_maps_404_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/heroes/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": "Not Found"
        })))
        .mount(&mock_server)
        .await;

    let service = create_service(&mock_server, logged_in());
    let result = service.find(404).await;

    assert!(matches!(result, Err(ServiceError::NotFound { id: 404 })));
}

#[tokio::test]
async fn test_find_all_surfaces_server_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/heroes"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let service = create_service(&mock_server, logged_in());
    let result = service.find_all().await;

    match result {
        Err(ServiceError::Http(HttpError::Response(error))) => {
            assert_eq!(error.code, 500);
            assert!(error.message.contains("boom"));
        }
        other => panic!("Expected HTTP response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_errors_keep_plain_text_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/heroes"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden for fakeUserId"))
        .mount(&mock_server)
        .await;

    let service = create_service(&mock_server, logged_in());
    let result = service.find_all().await;

    match result {
        Err(ServiceError::Http(HttpError::Response(error))) => {
            assert_eq!(error.code, 403);
            assert!(error.message.contains("Forbidden for fakeUserId"));
        }
        other => panic!("Expected HTTP response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_posts_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/heroes"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({"name": "Celeritas"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 14, "name": "Celeritas"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = create_service(&mock_server, logged_in());
    let hero = service.create("Celeritas").await.unwrap();

    assert_eq!(hero, Hero::new(14, "Celeritas"));
}

#[tokio::test]
async fn test_update_puts_hero_and_accepts_empty_answer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/heroes/15"))
        .and(body_json(serde_json::json!({"id": 15, "name": "Magneta"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = create_service(&mock_server, logged_in());
    let hero = Hero::new(15, "Magneta");

    assert_eq!(service.update(&hero).await.unwrap(), hero);
}

#[tokio::test]
async fn test_delete_reports_ok_flag_instead_of_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/heroes/11"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/heroes/12"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = create_service(&mock_server, logged_in());

    let deleted = service.delete(11).await.unwrap();
    assert!(deleted.ok);
    assert_eq!(deleted.status, 204);

    let refused = service.delete(12).await.unwrap();
    assert!(!refused.ok);
    assert_eq!(refused.status, 403);
}
