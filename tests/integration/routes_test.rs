//! Integration tests for public routes, request validation and avatars.

mod helpers;

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
    assert!(response.body["data"]["version"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/nothing-here", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_with_missing_term_is_empty() {
    let app = helpers::TestApp::new().await;
    let tokens = app.tokens_for(Uuid::new_v4());

    let response = app
        .request("GET", "/api/search", None, Some(&tokens.access_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], json!([]));

    let response = app
        .request(
            "GET",
            "/api/search?q=&scope=any",
            None,
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], json!([]));
}

#[tokio::test]
async fn test_search_rejects_unknown_scope() {
    let app = helpers::TestApp::new().await;
    let tokens = app.tokens_for(Uuid::new_v4());

    let response = app
        .request(
            "GET",
            "/api/search?q=guitar&scope=everyone",
            None,
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_feedback_rating_out_of_range() {
    let app = helpers::TestApp::new().await;
    let tokens = app.tokens_for(Uuid::new_v4());

    for rating in [0, 6] {
        let response = app
            .request(
                "POST",
                "/api/feedback",
                Some(json!({ "swap_request_id": Uuid::new_v4(), "rating": rating })),
                Some(&tokens.access_token),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "rating {rating}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_add_skill_requires_valid_type() {
    let app = helpers::TestApp::new().await;
    let tokens = app.tokens_for(Uuid::new_v4());

    let response = app
        .request(
            "POST",
            "/api/skills/mine",
            Some(json!({ "name": "Guitar", "skill_type": "teaching" })),
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/api/skills/mine",
            Some(json!({ "name": "", "skill_type": "offered" })),
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_swap_message_too_long() {
    let app = helpers::TestApp::new().await;
    let tokens = app.tokens_for(Uuid::new_v4());

    let response = app
        .request(
            "POST",
            "/api/swap-requests",
            Some(json!({
                "recipient_id": Uuid::new_v4(),
                "offered_skill_id": Uuid::new_v4(),
                "wanted_skill_id": Uuid::new_v4(),
                "message": "x".repeat(1001),
            })),
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_swap_path_must_be_uuid() {
    let app = helpers::TestApp::new().await;
    let tokens = app.tokens_for(Uuid::new_v4());

    let response = app
        .request(
            "POST",
            "/api/swap-requests/not-a-uuid/accept",
            None,
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_avatar_upload_rejects_non_image() {
    let app = helpers::TestApp::new().await;
    let tokens = app.tokens_for(Uuid::new_v4());

    let response = app
        .send(
            "PUT",
            "/api/profile/avatar",
            "text/plain",
            b"hello".to_vec(),
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_avatar_upload_size_limit() {
    let app = helpers::TestApp::new().await;
    let tokens = app.tokens_for(Uuid::new_v4());

    let response = app
        .send(
            "PUT",
            "/api/profile/avatar",
            "image/png",
            vec![0u8; helpers::TEST_AVATAR_LIMIT + 1],
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_avatar_served_publicly() {
    let app = helpers::TestApp::new().await;
    let user_id = Uuid::new_v4();

    let dir = app.avatar_dir.path().join(user_id.to_string());
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("avatar.png"), b"\x89PNG fake").unwrap();

    let response = app
        .send(
            "GET",
            &format!("/avatars/{user_id}/avatar.png"),
            "application/octet-stream",
            Vec::new(),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type.as_deref(), Some("image/png"));
    assert_eq!(response.raw, b"\x89PNG fake".to_vec());
}

#[tokio::test]
async fn test_missing_avatar_is_404() {
    let app = helpers::TestApp::new().await;

    let response = app
        .send(
            "GET",
            &format!("/avatars/{}/avatar.png", Uuid::new_v4()),
            "application/octet-stream",
            Vec::new(),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_avatar_path_traversal_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .send(
            "GET",
            "/avatars/../secret.txt",
            "application/octet-stream",
            Vec::new(),
            None,
        )
        .await;
    assert!(
        response.status.is_client_error(),
        "traversal answered {}",
        response.status
    );
}
