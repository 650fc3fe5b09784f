use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a placeholder cannot be
    /// resolved, the TOML is malformed, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistency found
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_health()?;
        self.validate_i18n()?;
        Ok(())
    }

    fn validate_health(&self) -> anyhow::Result<()> {
        let health = &self.server.health;
        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/': `{}`", health.path);
        }
        Ok(())
    }

    fn validate_i18n(&self) -> anyhow::Result<()> {
        let i18n = &self.i18n;
        if !i18n.enabled {
            return Ok(());
        }

        if i18n.root_path.is_none() {
            anyhow::bail!("i18n.root_path is required when i18n is enabled");
        }

        if i18n.accept_languages.is_empty() {
            anyhow::bail!("i18n.accept_languages must list at least one language");
        }

        if !i18n
            .accept_languages
            .iter()
            .any(|lang| lang.eq_ignore_ascii_case(&i18n.default_language))
        {
            anyhow::bail!(
                "i18n.default_language `{}` must be one of i18n.accept_languages",
                i18n.default_language
            );
        }

        Ok(())
    }
}
