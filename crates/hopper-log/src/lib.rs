//! Structured logging for Hopper.
//!
//! Console output via the `tracing` ecosystem with uptime timestamps, module
//! targets, and severity levels. Filterable through `RUST_LOG` or the config
//! system's `debug.log_level` setting.

use hopper_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Filter precedence: `RUST_LOG` if set in the environment, otherwise the
/// config `debug.log_level` when non-empty, otherwise `info`. Call once at
/// startup; a second call panics (the global subscriber is already set).
///
/// # Examples
///
/// ```no_run
/// use hopper_config::Config;
/// use hopper_log::init_logging;
///
/// // Basic initialization
/// init_logging(None);
///
/// // With config override
/// let config = Config::default();
/// init_logging(Some(&config));
/// ```
pub fn init_logging(config: Option<&Config>) {
    let filter_str = match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => "info".to_string(),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// Create an `EnvFilter` with the default filter string.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info")
}
