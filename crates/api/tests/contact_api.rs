//! Integration tests for `/api/contact`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;

#[tokio::test]
async fn submission_is_stored_and_listed() {
    let app = common::build_test_app();

    let response = post_json(
        app.clone(),
        "/api/contact",
        json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "subject": "",
            "message": "I would love a character commission.",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert!(created["id"].is_string());
    assert!(created["createdAt"].is_string());
    assert!(created["subject"].is_null(), "blank subject becomes null");

    let list = body_json(get(app, "/api/contact").await).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["email"], "ada@example.com");
}

#[tokio::test]
async fn first_violation_is_reported() {
    let app = common::build_test_app();

    // Both name and email are bad; name is checked first.
    let response = post_json(
        app,
        "/api/contact",
        json!({
            "name": "A",
            "email": "nope",
            "message": "short",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Validation error: Name must be at least 2 characters at \"name\""
    );
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        app.clone(),
        "/api/contact",
        json!({
            "name": "Ada",
            "email": "not-an-email",
            "message": "A long enough message",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Validation error: Please enter a valid email address at \"email\""
    );

    let list = body_json(get(app, "/api/contact").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_by_id_returns_submission_or_404() {
    let app = common::build_test_app();
    let created = body_json(
        post_json(
            app.clone(),
            "/api/contact",
            json!({
                "name": "Grace",
                "email": "grace@example.com",
                "subject": "Portfolio",
                "message": "Could you share your rates?",
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let fetched = get(app.clone(), &format!("/api/contact/{id}")).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched = body_json(fetched).await;
    assert_eq!(fetched["subject"], "Portfolio");
    assert_eq!(fetched["createdAt"], created["createdAt"]);

    let missing = get(app, "/api/contact/does-not-exist").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(missing).await["error"],
        "Contact submission not found"
    );
}
