//! Log subscriber setup for the site backend.
//!
//! The binary logs startup, migrations, and one completion line per request
//! (emitted by the trace_id middleware). Deployments set `format = "json"`
//! for log aggregation; local runs keep the human-readable default.

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use crate::config::LoggingConfig;

#[derive(Debug, PartialEq)]
enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// Anything other than an explicit "json" means pretty, so a typo in
    /// deployment config degrades to readable output instead of panicking.
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the configured level when set, which keeps ad-hoc
/// debugging possible without touching config files.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    match LogFormat::parse(&config.format) {
        LogFormat::Json => builder.json().with_current_span(true).init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}
