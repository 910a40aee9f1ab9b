//! Tracing subscriber setup

use crate::config::{AppConfig, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber
///
/// `RUST_LOG` wins over the configured filter. JSON output is used in
/// production or when `logging.json` is set. Calling this twice is a no-op.
pub fn init_tracing(logging: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match &logging.filter {
            Some(directive) => directive.as_str().into(),
            None if AppConfig::is_production() => "hydration_tracker_service=info".into(),
            None => "hydration_tracker_service=debug".into(),
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    let result = if logging.json || AppConfig::is_production() {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
