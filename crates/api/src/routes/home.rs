//! Composed home page payload.

use axum::{extract::State, Json};
use chrono::Utc;
use domain::models::{Event, Message, SiteSettings};
use domain::widgets::carousel::ROTATION_INTERVAL_MS;
use persistence::repositories::{
    AlphaSessionRepository, EventRepository, MessageRepository, MinistryRepository,
    SiteSettingsRepository,
};
use serde::Serialize;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::alpha::AlphaSessionResponse;
use crate::routes::ministries::MinistryResponse;

/// Hero carousel slides. Rotated by the office rarely enough that they ship
/// with the code, like the navigation tree.
const HERO_SLIDES: &[&str] = &[
    "https://wearepcc.com/wp-content/uploads/2025/12/20251123-_5290310-scaled.jpg",
    "https://wearepcc.com/wp-content/uploads/2025/12/20251207-_5290620-scaled.jpg",
    "https://wearepcc.com/wp-content/uploads/2025/12/20251205-_5290436-scaled.jpg",
    "https://wearepcc.com/wp-content/uploads/2025/12/20251123-_5290025-scaled.jpg",
    "https://wearepcc.com/wp-content/uploads/slider21/20250817-ReconnectSunday2.jpeg",
    "https://wearepcc.com/wp-content/uploads/slider21/Coffeetable1.jpeg",
    "https://wearepcc.com/wp-content/uploads/slider21/Rachelpreaching.jpeg",
    "https://wearepcc.com/wp-content/uploads/slider21/3girls.jpeg",
    "https://wearepcc.com/wp-content/uploads/slider21/AlphaFall2025.jpeg",
];

/// Hero carousel configuration for the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HeroSection {
    pub slides: Vec<&'static str>,
    pub rotation_interval_ms: u64,
}

/// Everything the home page renders, fetched in one round trip.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HomeResponse {
    pub hero: HeroSection,
    pub settings: Option<SiteSettings>,
    pub latest_messages: Vec<Message>,
    pub upcoming_events: Vec<Event>,
    pub alpha_session: Option<AlphaSessionResponse>,
    pub ministries: Vec<MinistryResponse>,
}

/// GET /api/v1/home
///
/// Mirrors the home page's parallel reads: settings, latest messages,
/// upcoming events, the current Alpha session, and active ministries.
/// Any missing optional piece is null/empty, never an error.
pub async fn get_home(State(state): State<AppState>) -> Result<Json<HomeResponse>, ApiError> {
    let today = Utc::now().date_naive();
    let content = &state.config.content;

    let settings_repo = SiteSettingsRepository::new(state.pool.clone());
    let message_repo = MessageRepository::new(state.pool.clone());
    let event_repo = EventRepository::new(state.pool.clone());
    let alpha_repo = AlphaSessionRepository::new(state.pool.clone());
    let ministry_repo = MinistryRepository::new(state.pool.clone());

    let (settings, messages, events, alpha, ministries) = tokio::try_join!(
        settings_repo.find(),
        message_repo.find_latest(content.home_messages_limit),
        event_repo.find_upcoming(today, content.home_events_limit),
        alpha_repo.find_current(today),
        ministry_repo.find_active(),
    )?;

    Ok(Json(HomeResponse {
        hero: HeroSection {
            slides: HERO_SLIDES.to_vec(),
            rotation_interval_ms: ROTATION_INTERVAL_MS,
        },
        settings: settings.map(SiteSettings::from),
        latest_messages: messages.into_iter().map(Message::from).collect(),
        upcoming_events: events.into_iter().map(Event::from).collect(),
        alpha_session: alpha.map(|entity| AlphaSessionResponse::from_session(entity.into())),
        ministries: ministries
            .into_iter()
            .map(|entity| MinistryResponse::from_ministry(entity.into()))
            .collect(),
    }))
}
