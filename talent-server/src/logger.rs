//! Logging Infrastructure

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "talent_server=info,tower_http=info";

/// Initialize the global tracing subscriber
///
/// Filter precedence: `RUST_LOG`, then `LOG_LEVEL`, then [`DEFAULT_FILTER`].
pub fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(resolve_filter(std::env::var("LOG_LEVEL").ok().as_deref()))
        .with_target(false)
        .with_thread_ids(false)
        .init();
}

fn resolve_filter(log_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| match log_level {
            Some(level) if !level.trim().is_empty() => EnvFilter::try_new(level),
            _ => EnvFilter::try_new(DEFAULT_FILTER),
        })
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
