//! Integration tests for the route guard and session teardown.

mod helpers;

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use skillswap_auth::jwt::JwtEncoder;
use skillswap_core::config::auth::AuthConfig;

const PROTECTED: &[(&str, &str)] = &[
    ("GET", "/api/auth/session"),
    ("POST", "/api/auth/logout"),
    ("GET", "/api/profile"),
    ("GET", "/api/skills"),
    ("GET", "/api/skills/mine"),
    ("GET", "/api/search?q=guitar"),
    ("GET", "/api/swap-requests"),
    ("GET", "/api/feedback"),
];

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = helpers::TestApp::new().await;

    for (method, path) in PROTECTED {
        let response = app.request(method, path, None, None).await;
        assert_eq!(
            response.status,
            StatusCode::UNAUTHORIZED,
            "{method} {path} should require a token"
        );
        assert_eq!(response.body["error"], "UNAUTHORIZED");
    }
}

#[tokio::test]
async fn test_malformed_authorization_header() {
    let app = helpers::TestApp::new().await;

    let response = app
        .send("GET", "/api/search?q=", "application/json", Vec::new(), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/api/search?q=", None, Some("not-a-jwt"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    let app = helpers::TestApp::new().await;

    let foreign = JwtEncoder::new(&AuthConfig {
        jwt_secret: "some-other-secret".to_string(),
        ..AuthConfig::default()
    });
    let tokens = foreign
        .generate_token_pair(Uuid::new_v4(), Uuid::new_v4(), "x@example.com")
        .unwrap();

    let response = app
        .request("GET", "/api/search?q=", None, Some(&tokens.access_token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_token_is_not_an_access_token() {
    let app = helpers::TestApp::new().await;
    let tokens = app.tokens_for(Uuid::new_v4());

    let response = app
        .request("GET", "/api/search?q=", None, Some(&tokens.refresh_token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_token_passes_guard() {
    let app = helpers::TestApp::new().await;
    let tokens = app.tokens_for(Uuid::new_v4());

    // A blank term is answered without touching the database.
    let response = app
        .request("GET", "/api/search?q=%20%20", None, Some(&tokens.access_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"], json!([]));
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let app = helpers::TestApp::new().await;
    let tokens = app.tokens_for(Uuid::new_v4());

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&tokens.access_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/search?q=", None, Some(&tokens.access_token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // Refreshing a signed-out session is refused as well.
    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(json!({ "refresh_token": tokens.refresh_token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_leaves_other_sessions_alone() {
    let app = helpers::TestApp::new().await;
    let user_id = Uuid::new_v4();
    let first = app.tokens_for(user_id);
    let second = app.tokens_for(user_id);

    app.request("POST", "/api/auth/logout", None, Some(&first.access_token))
        .await;

    let response = app
        .request("GET", "/api/search?q=", None, Some(&second.access_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_register_validation() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": "not-an-email", "password": "secret123", "name": "Ana" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": "ana@example.com", "password": "secret123" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_weak_password_rejected_before_database() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": "ana@example.com", "password": "short", "name": "Ana" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = helpers::TestApp::new().await;
    let tokens = app.tokens_for(Uuid::new_v4());

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(json!({ "refresh_token": tokens.access_token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
