//! Integration tests for the sermon archive endpoints.

mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use common::*;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

async fn insert_message(
    pool: &PgPool,
    title: &str,
    speaker: &str,
    date: NaiveDate,
    series: Option<&str>,
    video_url: Option<&str>,
) -> Uuid {
    sqlx::query_scalar(
        r#"
        INSERT INTO messages (title, speaker, date, series, video_url)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(speaker)
    .bind(date)
    .bind(series)
    .bind(video_url)
    .fetch_one(pool)
    .await
    .expect("Failed to insert test message")
}

#[tokio::test]
async fn list_filters_by_series_and_speaker() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let series = unique_marker("series");
    let speaker = unique_marker("speaker");
    let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    insert_message(&pool, "In the series", &speaker, date, Some(&series), None).await;
    insert_message(&pool, "Different series", &speaker, date, Some("Other"), None).await;

    let response = app
        .clone()
        .oneshot(get_request(&format!(
            "/api/v1/messages?series={}&speaker={}",
            series, speaker
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let messages = body.as_array().expect("expected a JSON array");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["title"], "In the series");
    assert_eq!(messages[0]["series"], series.as_str());
}

#[tokio::test]
async fn latest_respects_limit_and_orders_by_date() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let speaker = unique_marker("speaker");
    // Far-future dates so these sort ahead of seed content.
    insert_message(
        &pool,
        "Older",
        &speaker,
        NaiveDate::from_ymd_opt(2030, 1, 5).unwrap(),
        None,
        None,
    )
    .await;
    insert_message(
        &pool,
        "Newest",
        &speaker,
        NaiveDate::from_ymd_opt(2030, 1, 12).unwrap(),
        None,
        None,
    )
    .await;

    let response = app
        .oneshot(get_request("/api/v1/messages/latest?limit=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let messages = body.as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["title"], "Newest");
}

#[tokio::test]
async fn filters_include_inserted_series_and_speaker() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let series = unique_marker("series");
    let speaker = unique_marker("speaker");
    insert_message(
        &pool,
        "Filterable",
        &speaker,
        NaiveDate::from_ymd_opt(2026, 2, 8).unwrap(),
        Some(&series),
        None,
    )
    .await;

    let response = app
        .oneshot(get_request("/api/v1/messages/filters"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    let series_list: Vec<&str> = body["series"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    let speaker_list: Vec<&str> = body["speakers"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert!(series_list.contains(&series.as_str()));
    assert!(speaker_list.contains(&speaker.as_str()));
}

#[tokio::test]
async fn detail_returns_embed_url_and_series_siblings() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let series = unique_marker("series");
    let speaker = unique_marker("speaker");
    let date = NaiveDate::from_ymd_opt(2026, 4, 5).unwrap();
    let id = insert_message(
        &pool,
        "Part One",
        &speaker,
        date,
        Some(&series),
        Some("https://www.youtube.com/watch?v=abc123"),
    )
    .await;
    insert_message(&pool, "Part Two", &speaker, date, Some(&series), None).await;

    let response = app
        .oneshot(get_request(&format!("/api/v1/messages/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["title"], "Part One");
    assert_eq!(
        body["embed_url"],
        "https://www.youtube-nocookie.com/embed/abc123"
    );
    let related = body["related"].as_array().unwrap();
    assert_eq!(related.len(), 1);
    assert_eq!(related[0]["title"], "Part Two");
}

#[tokio::test]
async fn unknown_message_returns_404() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool);

    let response = app
        .oneshot(get_request(&format!("/api/v1/messages/{}", Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "not_found");
}
