//! Integration tests for cookie-backed sessions.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use heroes_client::auth::{
    parse_expires, Cookie, CookieStore, MemoryCookieJar, SessionManager, TokenResponse,
    TOKEN_ID_KEY, USER_ID_KEY,
};

fn create_sessions() -> (Arc<MemoryCookieJar>, SessionManager) {
    let jar = Arc::new(MemoryCookieJar::new());
    let sessions = SessionManager::new(jar.clone());
    (jar, sessions)
}

#[test]
fn test_reads_return_empty_strings_without_session() {
    let (_, sessions) = create_sessions();
    assert_eq!(sessions.user_logged(), "");
    assert_eq!(sessions.token(), "");
    assert!(!sessions.is_authenticated());
}

#[test]
fn test_both_cookies_share_expiry_and_root_path() {
    let (jar, sessions) = create_sessions();
    sessions.store_session("fakeUserId", "abc", 1800);

    let user = jar.cookie(USER_ID_KEY).unwrap();
    let token = jar.cookie(TOKEN_ID_KEY).unwrap();

    assert_eq!(user.expires, token.expires);
    assert_eq!(user.path, "/");
    assert_eq!(token.path, "/");
    assert!(user.to_string().starts_with("user_id=fakeUserId; expires="));
    assert!(token.to_string().ends_with("; path=/"));
}

#[test]
fn test_add_user_and_token_info_separately() {
    let (jar, sessions) = create_sessions();
    let token = TokenResponse {
        access_token: Some("abc".to_string()),
        ..TokenResponse::default()
    };

    let expires = SessionManager::expiry_at(60);
    sessions.add_user_info("fakeUserId", expires);
    std::thread::sleep(Duration::from_millis(5));
    sessions.add_token_info(&token, expires);

    assert_eq!(sessions.user_logged(), "fakeUserId");
    assert_eq!(sessions.token(), "abc");
    assert_eq!(
        jar.cookie(USER_ID_KEY).unwrap().expires,
        jar.cookie(TOKEN_ID_KEY).unwrap().expires
    );
    assert_eq!(jar.cookie(TOKEN_ID_KEY).unwrap().expires, expires);
}

#[test]
fn test_add_token_info_without_token_writes_nothing() {
    let (jar, sessions) = create_sessions();
    sessions.add_token_info(&TokenResponse::default(), SessionManager::expiry_at(60));

    assert!(jar.cookie(TOKEN_ID_KEY).is_none());
    assert!(jar.is_empty());
}

#[test]
fn test_header_authorization_only_with_token() {
    let (_, sessions) = create_sessions();
    let mut headers = HashMap::new();
    headers.insert("Accept".to_string(), "application/json".to_string());

    sessions.add_header_authorization(&mut headers);
    assert_eq!(headers.len(), 1);

    sessions.store_session("fakeUserId", "abc", 60);
    sessions.add_header_authorization(&mut headers);
    assert_eq!(headers.get("Authorization"), Some(&"Bearer abc".to_string()));
}

#[test]
fn test_clear_cookies_writes_expired_dates() {
    let (jar, sessions) = create_sessions();
    sessions.store_session("fakeUserId", "abc", 60);

    sessions.clear_cookies();

    assert_eq!(sessions.user_logged(), "");
    assert_eq!(sessions.token(), "");
    assert!(jar.is_empty());

    let expired = Cookie::expired(TOKEN_ID_KEY);
    assert_eq!(expired.expires_string(), "Thu, 01 Jan 1970 00:00:00 GMT");
}

#[test]
fn test_expiry_string_is_parseable_and_in_the_future() {
    let expires = parse_expires(&SessionManager::expiry_string(5)).unwrap();
    let now = Utc::now();

    assert!(expires > now);
    assert!(expires <= now + chrono::Duration::seconds(5));
}

#[tokio::test]
async fn test_short_session_expires_after_its_lifetime() {
    let (_, sessions) = create_sessions();
    let expires = parse_expires(&SessionManager::expiry_string(1)).unwrap();
    sessions.store_session("fakeUserId", "abc", 1);
    assert!(sessions.is_authenticated());

    tokio::time::sleep(Duration::from_millis(1100)).await;

    assert!(expires < Utc::now());
    assert_eq!(sessions.token(), "");
    assert_eq!(sessions.user_logged(), "");
    assert!(sessions.check_authentication().is_err());
}

#[test]
fn test_sessions_sharing_a_store_see_each_other() {
    let jar: Arc<dyn CookieStore> = Arc::new(MemoryCookieJar::new());
    let writer = SessionManager::new(jar.clone());
    let reader = SessionManager::new(jar);

    writer.store_session("fakeUserId", "abc", 60);
    assert_eq!(reader.token(), "abc");

    reader.clear_cookies();
    assert_eq!(writer.user_logged(), "");
}
