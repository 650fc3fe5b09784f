//! Logging for Verdict
//!
//! Installs a `tracing-subscriber` fmt layer filtered by `RUST_LOG` or the
//! configured directive.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use verdict_config::{LogFormat, TelemetryConfig};

/// Build the filter, preferring `RUST_LOG` over the configured directive
fn build_filter(config: &TelemetryConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: &TelemetryConfig) -> anyhow::Result<()> {
    let filter = build_filter(config);
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Pretty => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false);
            registry.with(fmt_layer).try_init()
        }
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true);
            registry.with(fmt_layer).try_init()
        }
    };

    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_directive_applies_without_rust_log() {
        let config = TelemetryConfig {
            log_filter: "verdict=debug".to_string(),
            format: LogFormat::Pretty,
        };

        temp_env::with_var_unset("RUST_LOG", || {
            assert_eq!(build_filter(&config).to_string(), "verdict=debug");
        });
    }

    #[test]
    fn rust_log_wins_over_config() {
        let config = TelemetryConfig::default();

        temp_env::with_var("RUST_LOG", Some("warn"), || {
            assert_eq!(build_filter(&config).to_string(), "warn");
        });
    }
}
