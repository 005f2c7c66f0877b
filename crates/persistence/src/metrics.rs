//! Query timing metrics for the repositories.

use metrics::histogram;
use std::time::Instant;

/// Record the duration of one named database query.
pub fn record_query_duration(query_name: &str, duration_secs: f64) {
    histogram!(
        "site_db_query_duration_seconds",
        "query" => query_name.to_string()
    )
    .record(duration_secs);
}

/// Times a repository query and records it on drop of the timer.
///
/// Usage:
/// ```ignore
/// let timer = QueryTimer::new("find_active_ministries");
/// let result = sqlx::query_as::<_, MinistryEntity>(...).fetch_all(&pool).await;
/// timer.record();
/// result
/// ```
pub struct QueryTimer {
    query_name: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query_name: &'static str) -> Self {
        Self {
            query_name,
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_query_duration(self.query_name, duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_keeps_query_name() {
        let timer = QueryTimer::new("find_site_settings");
        assert_eq!(timer.query_name, "find_site_settings");
    }
}
