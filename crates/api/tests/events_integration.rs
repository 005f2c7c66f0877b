//! Integration tests for the events calendar endpoints.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::*;
use sqlx::PgPool;
use tower::ServiceExt;

async fn insert_event(
    pool: &PgPool,
    title: &str,
    category: &str,
    days_from_now: i64,
    featured: bool,
) {
    let start_date = Utc::now().date_naive() + Duration::days(days_from_now);
    sqlx::query(
        r#"
        INSERT INTO events (title, description, start_date, location, category, featured)
        VALUES ($1, 'test event', $2, 'Fellowship Hall', $3, $4)
        "#,
    )
    .bind(title)
    .bind(start_date)
    .bind(category)
    .bind(featured)
    .execute(pool)
    .await
    .expect("Failed to insert test event");
}

#[tokio::test]
async fn upcoming_excludes_past_events() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let past = unique_marker("past-event");
    let future = unique_marker("future-event");
    insert_event(&pool, &past, "community", -7, false).await;
    insert_event(&pool, &future, "community", 7, false).await;

    let response = app
        .oneshot(get_request("/api/v1/events/upcoming?limit=50"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["title"].as_str())
        .collect();
    assert!(titles.contains(&future.as_str()));
    assert!(!titles.contains(&past.as_str()));
}

#[tokio::test]
async fn upcoming_puts_featured_events_first() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let plain = unique_marker("plain-event");
    let featured = unique_marker("featured-event");
    // The plain event starts sooner; featured still sorts ahead of it.
    insert_event(&pool, &plain, "community", 1, false).await;
    insert_event(&pool, &featured, "community", 30, true).await;

    let response = app
        .oneshot(get_request("/api/v1/events/upcoming?limit=50"))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["title"].as_str())
        .collect();

    let featured_pos = titles.iter().position(|t| *t == featured).unwrap();
    let plain_pos = titles.iter().position(|t| *t == plain).unwrap();
    assert!(featured_pos < plain_pos);
}

#[tokio::test]
async fn list_filters_by_category() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let category = unique_marker("category");
    let title = unique_marker("event");
    insert_event(&pool, &title, &category, 14, false).await;

    let response = app
        .oneshot(get_request(&format!("/api/v1/events?category={}", category)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let events = body.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["title"], title.as_str());
}
