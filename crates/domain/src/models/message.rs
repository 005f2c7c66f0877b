//! Sermon/message archive models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded message in the sermon archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Message {
    pub id: Uuid,
    pub title: String,
    pub speaker: String,
    pub date: NaiveDate,
    pub series: Option<String>,
    pub scripture: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub audio_url: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Derive a YouTube embed URL from the message's video URL, if it points
    /// at a YouTube watch or short link. Non-YouTube URLs return `None` and
    /// the client falls back to a plain external link.
    pub fn youtube_embed_url(&self) -> Option<String> {
        self.video_url.as_deref().and_then(youtube_embed_url)
    }
}

/// Extract the video id from the common YouTube URL shapes and rewrite it
/// into the privacy-friendly embed form.
pub fn youtube_embed_url(url: &str) -> Option<String> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let rest = rest.strip_prefix("www.").unwrap_or(rest);

    let video_id = if let Some(path) = rest.strip_prefix("youtube.com/watch?") {
        path.split('&')
            .find_map(|pair| pair.strip_prefix("v="))
            .map(str::to_string)
    } else if let Some(path) = rest.strip_prefix("youtu.be/") {
        path.split(['?', '&']).next().map(str::to_string)
    } else if let Some(path) = rest.strip_prefix("youtube.com/embed/") {
        path.split(['?', '&']).next().map(str::to_string)
    } else {
        None
    };

    video_id
        .filter(|id| !id.is_empty())
        .map(|id| format!("https://www.youtube-nocookie.com/embed/{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_from_watch_link() {
        assert_eq!(
            youtube_embed_url("https://www.youtube.com/watch?v=abc123"),
            Some("https://www.youtube-nocookie.com/embed/abc123".to_string())
        );
    }

    #[test]
    fn embed_url_from_watch_link_with_extra_params() {
        assert_eq!(
            youtube_embed_url("https://youtube.com/watch?t=42&v=abc123"),
            Some("https://www.youtube-nocookie.com/embed/abc123".to_string())
        );
    }

    #[test]
    fn embed_url_from_short_link() {
        assert_eq!(
            youtube_embed_url("https://youtu.be/abc123?t=10"),
            Some("https://www.youtube-nocookie.com/embed/abc123".to_string())
        );
    }

    #[test]
    fn embed_url_passes_through_embed_links() {
        assert_eq!(
            youtube_embed_url("https://www.youtube.com/embed/abc123"),
            Some("https://www.youtube-nocookie.com/embed/abc123".to_string())
        );
    }

    #[test]
    fn embed_url_rejects_non_youtube() {
        assert_eq!(youtube_embed_url("https://vimeo.com/12345"), None);
        assert_eq!(youtube_embed_url("not a url"), None);
        assert_eq!(youtube_embed_url("https://www.youtube.com/watch?list=x"), None);
    }
}
