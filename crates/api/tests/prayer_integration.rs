//! Integration tests for the prayer request submission endpoint.

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn valid_submission_is_persisted() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let name = unique_marker("requester");
    let response = app
        .oneshot(json_request(
            "/api/v1/prayer-requests",
            json!({
                "name": name,
                "email": "jamie@example.com",
                "request": "Please pray for my family.",
                "is_public": true
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    assert_eq!(body["name"], name.as_str());
    assert_eq!(body["is_public"], true);
    assert!(body["id"].as_str().is_some());

    let stored: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM prayer_requests WHERE name = $1")
            .bind(&name)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, 1);
}

#[tokio::test]
async fn is_public_defaults_to_false() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool);

    let response = app
        .oneshot(json_request(
            "/api/v1/prayer-requests",
            json!({
                "name": unique_marker("requester"),
                "request": "Please pray."
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    assert_eq!(body["is_public"], false);
}

#[tokio::test]
async fn empty_name_is_rejected() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool);

    let response = app
        .oneshot(json_request(
            "/api/v1/prayer-requests",
            json!({
                "name": "",
                "request": "Please pray."
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "validation_error");
    let details = body["details"].as_array().unwrap();
    assert!(details.iter().any(|d| d["field"] == "name"));
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool);

    let response = app
        .oneshot(json_request(
            "/api/v1/prayer-requests",
            json!({
                "name": "Jamie",
                "email": "not-an-email",
                "request": "Please pray."
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn submissions_are_rate_limited_per_client() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let mut config = test_config();
    config.security.submission_rate_limit_per_minute = 1;
    let app = create_test_app(config, pool);

    let payload = || {
        json_request(
            "/api/v1/prayer-requests",
            json!({
                "name": unique_marker("requester"),
                "request": "Please pray."
            }),
        )
    };

    let first = app.clone().oneshot(payload()).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app.oneshot(payload()).await.unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(second.headers().contains_key(axum::http::header::RETRY_AFTER));
}

#[tokio::test]
async fn reads_are_not_rate_limited() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let mut config = test_config();
    config.security.submission_rate_limit_per_minute = 1;
    let app = create_test_app(config, pool);

    for _ in 0..5 {
        let response = app
            .clone()
            .oneshot(get_request("/api/v1/navigation"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
