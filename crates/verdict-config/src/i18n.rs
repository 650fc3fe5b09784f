use std::path::PathBuf;

use serde::Deserialize;

/// Localization of custom error messages
///
/// Catalogs live in `root_path` as one `<language>.toml` file per accepted
/// language, each a flat table of `CODE = "message"` entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct I18nConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Directory holding the catalog files
    pub root_path: Option<PathBuf>,
    /// Language used when the request accepts none of ours
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Languages with a catalog file
    #[serde(default = "default_accept_languages")]
    pub accept_languages: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            root_path: None,
            default_language: default_language(),
            accept_languages: default_accept_languages(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_accept_languages() -> Vec<String> {
    vec![default_language()]
}
