//! Logging setup using `tracing-subscriber`.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the global subscriber, writing compact output to stderr.
///
/// `RUST_LOG` takes precedence when the user passed no explicit verbosity
/// flag; otherwise the flag-derived level filter applies.
pub fn init_logging(level_filter: LevelFilter, use_env_filter: bool) {
    let filter = if use_env_filter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level_filter.to_string()))
    } else {
        EnvFilter::new(level_filter.to_string())
    };
    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry().with(filter).with(layer).init();
}
