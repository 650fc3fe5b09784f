//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use tempfile::TempDir;
use verdict_config::{Config, HealthConfig, I18nConfig, ServerConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
    catalog_dir: Option<TempDir>,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                },
                ..Config::default()
            },
            catalog_dir: None,
        }
    }

    /// Enable i18n with English and Thai catalogs written to a temp dir
    pub fn with_catalogs(mut self) -> Self {
        let dir = tempfile::tempdir().expect("create catalog dir");
        std::fs::write(dir.path().join("en.toml"), "CUS001 = \"Custom error\"\n").expect("write en catalog");
        std::fs::write(dir.path().join("th.toml"), "CUS001 = \"ข้อผิดพลาด\"\n").expect("write th catalog");

        self.config.i18n = I18nConfig {
            enabled: true,
            root_path: Some(dir.path().to_path_buf()),
            default_language: "en".to_string(),
            accept_languages: vec!["th".to_string(), "en".to_string()],
        };
        self.catalog_dir = Some(dir);
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Finish building; the returned guard keeps catalog files alive
    pub fn build(self) -> (Config, Option<TempDir>) {
        (self.config, self.catalog_dir)
    }
}
