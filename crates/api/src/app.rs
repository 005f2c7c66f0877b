use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, rate_limit_middleware, security_headers_middleware,
    trace_id, RateLimiterState,
};
use crate::routes::{
    alpha, events, groups, health, home, messages, ministries, navigation, prayer, settings,
    staff, support,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub rate_limiter: Option<Arc<RateLimiterState>>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    // Rate limiting guards the one public write; zero disables it.
    let rate_limiter = if config.security.submission_rate_limit_per_minute > 0 {
        Some(Arc::new(RateLimiterState::new(
            config.security.submission_rate_limit_per_minute,
        )))
    } else {
        None
    };

    let state = AppState {
        pool,
        config: config.clone(),
        rate_limiter,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Read-only content routes (everything the pages render).
    let content_routes = Router::new()
        .route("/api/v1/home", get(home::get_home))
        .route("/api/v1/navigation", get(navigation::get_navigation))
        .route("/api/v1/settings", get(settings::get_settings))
        .route("/api/v1/messages", get(messages::list_messages))
        .route("/api/v1/messages/latest", get(messages::latest_messages))
        .route("/api/v1/messages/filters", get(messages::message_filters))
        .route("/api/v1/messages/:id", get(messages::get_message))
        .route("/api/v1/events", get(events::list_events))
        .route("/api/v1/events/upcoming", get(events::upcoming_events))
        .route("/api/v1/alpha/current", get(alpha::current_session))
        .route("/api/v1/ministries", get(ministries::list_ministries))
        .route("/api/v1/staff", get(staff::list_staff))
        .route("/api/v1/staff/leadership", get(staff::leadership_team))
        .route("/api/v1/staff/:id", get(staff::get_staff_member))
        .route("/api/v1/groups", get(groups::list_groups))
        .route("/api/v1/groups/open", get(groups::open_groups))
        .route("/api/v1/support", get(support::list_support))
        .route(
            "/api/v1/support/:category",
            get(support::get_support_category),
        );

    // Submission routes: the prayer form is the only write, rate limited
    // per client IP.
    let submission_routes = Router::new()
        .route(
            "/api/v1/prayer-requests",
            post(prayer::submit_prayer_request),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ));

    // Operational routes.
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::readiness))
        .route("/api/health/live", get(health::liveness))
        .route("/metrics", get(metrics_handler));

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(content_routes)
        .merge(submission_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware)) // Security headers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware)) // Prometheus metrics
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id)) // Request ID and logging
        .layer(cors)
        .with_state(state)
}
