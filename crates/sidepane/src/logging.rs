#![forbid(unsafe_code)]

//! JSON log output for hosts that want sidepane's structured events.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Environment variable holding the log filter directive.
pub const ENV_LOG_FILTER: &str = "SIDEPANE_LOG";

/// Filter used when `SIDEPANE_LOG` is unset, blank or invalid.
pub const DEFAULT_LOG_FILTER: &str = "sidepane_layout=info,sidepane_web=info";

/// Build the filter from `SIDEPANE_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    env_filter_with(|key| std::env::var(key).ok())
}

/// Build the filter using a custom environment lookup (for tests).
#[must_use]
pub fn env_filter_with<F>(get_env: F) -> EnvFilter
where
    F: Fn(&str) -> Option<String>,
{
    get_env(ENV_LOG_FILTER)
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives.trim()).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install a global JSON subscriber writing to stderr.
///
/// Fails if a global subscriber is already installed.
pub fn init_json() -> Result<(), TryInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()
}
