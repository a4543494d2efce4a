use crate::utils::error::{ReservationError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("reservation_service={}", level)))
}

fn already_set(e: impl std::fmt::Display) -> ReservationError {
    ReservationError::Logger {
        message: e.to_string(),
    }
}

/// Installs a compact subscriber. Fails if the host already installed a global one.
pub fn init_logger(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(default_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(already_set)
}

pub fn init_json_logger(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(default_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init()
        .map_err(already_set)
}

/// Picks the output format from the `[logging]` section of the config.
pub fn init_from_config(config: &crate::config::LoggingConfig) -> Result<()> {
    if config.json {
        init_json_logger(&config.level)
    } else {
        init_logger(&config.level)
    }
}
