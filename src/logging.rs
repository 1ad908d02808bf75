//! Logging setup for the CLI.
//!
//! `RUST_LOG` wins when set; otherwise the level passed in (from `--log-level`
//! or `LOG_LEVEL`) applies to this crate. Output goes to stderr so PNG bytes
//! written to stdout stay clean.

use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .try_init();

    tracing::debug!(level, "logging initialized");
}

fn default_directive(level: &str) -> String {
    let level = match level.to_ascii_lowercase().as_str() {
        l @ ("trace" | "debug" | "info" | "warn" | "error" | "off") => l.to_string(),
        _ => "info".to_string(),
    };
    format!("{}={level},warn", env!("CARGO_CRATE_NAME"))
}
