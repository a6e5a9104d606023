//! Integration tests for search, the swap lifecycle and feedback against a
//! real database.
//!
//! Each test skips when `SKILLSWAP_TEST_DATABASE_URL` is unset. Skill names
//! carry a per-test tag so tests sharing the database stay independent.

mod helpers;

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use helpers::{TestApp, TestMember};

macro_rules! database_app {
    () => {
        match TestApp::with_database().await {
            Some(app) => app,
            None => {
                eprintln!("{} not set; skipping", helpers::TEST_DATABASE_URL_ENV);
                return;
            }
        }
    };
}

fn tag() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// Ana and Cleo offer Guitar, Cleo's profile is private. Bruno offers
/// Spanish and wants Guitar.
struct Scenario {
    ana: TestMember,
    bruno: TestMember,
    cleo: TestMember,
    guitar: String,
    guitar_id: Uuid,
    spanish_id: Uuid,
}

async fn scenario(app: &TestApp) -> Scenario {
    let tag = tag();
    let guitar = format!("Guitar {tag}");
    let spanish = format!("Spanish {tag}");

    let ana = app.register("Ana").await;
    let bruno = app.register("Bruno").await;
    let cleo = app.register("Cleo").await;

    let guitar_id = app.add_skill(&ana, &guitar, "offered").await;
    assert_eq!(app.add_skill(&cleo, &guitar, "offered").await, guitar_id);
    let spanish_id = app.add_skill(&bruno, &spanish, "offered").await;
    assert_eq!(app.add_skill(&bruno, &guitar, "wanted").await, guitar_id);

    let response = app
        .request(
            "PUT",
            "/api/profile",
            Some(json!({ "name": "Cleo", "is_public": false })),
            Some(&cleo.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["is_public"], false);

    Scenario {
        ana,
        bruno,
        cleo,
        guitar,
        guitar_id,
        spanish_id,
    }
}

async fn propose(app: &TestApp, s: &Scenario) -> String {
    let response = app
        .request(
            "POST",
            "/api/swap-requests",
            Some(json!({
                "recipient_id": s.bruno.id,
                "offered_skill_id": s.guitar_id,
                "wanted_skill_id": s.spanish_id,
                "message": "Guitar for Spanish?",
            })),
            Some(&s.ana.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    assert_eq!(response.body["data"]["status"], "pending");

    response.body["data"]["id"]
        .as_str()
        .expect("Swap id")
        .to_string()
}

#[tokio::test]
async fn test_search_skips_self_and_private_profiles() {
    let app = database_app!();
    let s = scenario(&app).await;

    let term = s.guitar.to_uppercase().replace(' ', "%20");
    let response = app
        .request(
            "GET",
            &format!("/api/search?q={term}&scope=any"),
            None,
            Some(&s.ana.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let results = response.body["data"].as_array().expect("Result list");
    assert_eq!(results.len(), 1, "{}", response.body);
    assert_eq!(results[0]["profile"]["user_id"], s.bruno.id.to_string());
    assert_eq!(results[0]["profile"]["name"], "Bruno");
    let offered: Vec<&str> = results[0]["offered_skills"]
        .as_array()
        .expect("Offered skills")
        .iter()
        .filter_map(|skill| skill["name"].as_str())
        .collect();
    assert_eq!(offered, vec![s.guitar.replace("Guitar", "Spanish")]);

    // The default scope only looks at offered skills, and Bruno only wants Guitar.
    let response = app
        .request(
            "GET",
            &format!("/api/search?q={term}"),
            None,
            Some(&s.ana.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], json!([]));

    // Hidden from everyone else, Cleo still sees her own profile.
    let response = app
        .request(
            "GET",
            &format!("/api/profiles/{}", s.cleo.id),
            None,
            Some(&s.ana.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    let response = app
        .request("GET", "/api/profile", None, Some(&s.cleo.token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_swap_decisions_and_deletion_rules() {
    let app = database_app!();
    let s = scenario(&app).await;
    let swap_id = propose(&app, &s).await;

    // Only the requester may delete.
    let response = app
        .request(
            "DELETE",
            &format!("/api/swap-requests/{swap_id}"),
            None,
            Some(&s.bruno.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // Outsiders can neither read nor decide.
    let response = app
        .request(
            "POST",
            &format!("/api/swap-requests/{swap_id}/accept"),
            None,
            Some(&s.cleo.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "POST",
            &format!("/api/swap-requests/{swap_id}/accept"),
            None,
            Some(&s.bruno.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "accepted");
    assert_eq!(response.body["data"]["offered_skill"]["name"], s.guitar);

    // Decisions are final.
    let response = app
        .request(
            "POST",
            &format!("/api/swap-requests/{swap_id}/reject"),
            None,
            Some(&s.bruno.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "DELETE",
            &format!("/api/swap-requests/{swap_id}"),
            None,
            Some(&s.ana.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // A pending request can be withdrawn by the requester.
    let pending_id = propose(&app, &s).await;
    let response = app
        .request(
            "DELETE",
            &format!("/api/swap-requests/{pending_id}"),
            None,
            Some(&s.ana.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/swap-requests", None, Some(&s.bruno.token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let incoming = response.body["data"]["incoming"]
        .as_array()
        .expect("Incoming list");
    assert_eq!(incoming.len(), 1);
    assert_eq!(incoming[0]["id"], swap_id);
}

#[tokio::test]
async fn test_feedback_once_per_party() {
    let app = database_app!();
    let s = scenario(&app).await;
    let swap_id = propose(&app, &s).await;

    // Not yet accepted.
    let response = app
        .request(
            "POST",
            "/api/feedback",
            Some(json!({ "swap_request_id": swap_id, "rating": 5 })),
            Some(&s.ana.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "POST",
            &format!("/api/swap-requests/{swap_id}/accept"),
            None,
            Some(&s.bruno.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    for (reviewer, rating) in [(&s.ana, 5), (&s.bruno, 4)] {
        let response = app
            .request(
                "POST",
                "/api/feedback",
                Some(json!({ "swap_request_id": swap_id, "rating": rating })),
                Some(&reviewer.token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);

        let response = app
            .request(
                "POST",
                "/api/feedback",
                Some(json!({ "swap_request_id": swap_id, "rating": rating })),
                Some(&reviewer.token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CONFLICT);
        assert_eq!(response.body["error"], "CONFLICT");
    }

    let response = app
        .request(
            "POST",
            "/api/feedback",
            Some(json!({ "swap_request_id": swap_id, "rating": 3 })),
            Some(&s.cleo.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("GET", "/api/feedback", None, Some(&s.bruno.token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let overview = &response.body["data"];
    assert_eq!(overview["average_rating"], 5.0);
    assert_eq!(overview["received"].as_array().map(Vec::len), Some(1));
    assert_eq!(overview["given"].as_array().map(Vec::len), Some(1));
    assert_eq!(overview["pending"], json!([]));
}

#[tokio::test]
async fn test_email_is_stored_lowercase() {
    let app = database_app!();
    let email = format!("Ana-{}@LocalHost", tag());

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": email, "password": "password123", "name": "Ana" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    assert_eq!(response.body["data"]["user"]["email"], email.to_lowercase());

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": email.to_uppercase(), "password": "password123" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["tokens"]["access_token"].is_string());

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": email, "password": "password123", "name": "Ana" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}
