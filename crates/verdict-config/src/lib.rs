#![allow(clippy::must_use_candidate)]

mod env;
pub mod health;
pub mod i18n;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use health::*;
pub use i18n::*;
pub use server::*;
pub use telemetry::*;

/// Top-level Verdict configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Message localization for custom errors
    #[serde(default)]
    pub i18n: I18nConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
