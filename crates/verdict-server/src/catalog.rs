use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{Localize, LocalizeError, RequestContext};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("failed to parse catalog {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },

    #[error("default language `{0}` has no catalog")]
    MissingDefault(String),
}

/// Message catalogs keyed by language, then by error code
///
/// The language is negotiated from `Accept-Language`; codes missing from the
/// negotiated catalog are looked up in the default language.
#[derive(Debug, Clone)]
pub struct Catalog {
    default_language: String,
    messages: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// Build a catalog from in-memory tables
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingDefault`] when `default_language` has no table
    pub fn from_messages(
        default_language: &str,
        messages: HashMap<String, HashMap<String, String>>,
    ) -> Result<Self, CatalogError> {
        let messages: HashMap<_, _> = messages
            .into_iter()
            .map(|(language, table)| (language.to_ascii_lowercase(), table))
            .collect();
        let default_language = default_language.to_ascii_lowercase();

        if !messages.contains_key(&default_language) {
            return Err(CatalogError::MissingDefault(default_language));
        }

        Ok(Self {
            default_language,
            messages,
        })
    }

    /// Load `<root>/<language>.toml` for every language
    ///
    /// Each file is a flat table of `CODE = "message"` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, or the default
    /// language is not among `languages`
    pub fn load(root: &Path, languages: &[String], default_language: &str) -> Result<Self, CatalogError> {
        let mut messages = HashMap::with_capacity(languages.len());

        for language in languages {
            let path = root.join(format!("{language}.toml"));
            let raw = std::fs::read_to_string(&path).map_err(|source| CatalogError::Read {
                path: path.clone(),
                source,
            })?;
            let table: HashMap<String, String> =
                toml::from_str(&raw).map_err(|source| CatalogError::Parse { path, source })?;

            tracing::debug!(%language, entries = table.len(), "loaded message catalog");
            messages.insert(language.clone(), table);
        }

        Self::from_messages(default_language, messages)
    }

    /// Language used when negotiation finds no match
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Message for `code` in exactly `language`
    pub fn lookup(&self, language: &str, code: &str) -> Option<&str> {
        self.messages.get(language)?.get(code).map(String::as_str)
    }

    /// First accepted language we hold a catalog for, else the default
    ///
    /// A regional tag such as `th-th` also matches a plain `th` catalog.
    pub fn negotiate<'a>(&'a self, accepted: &[String]) -> &'a str {
        accepted
            .iter()
            .find_map(|tag| {
                let primary = tag.split('-').next().unwrap_or(tag.as_str());
                [tag.as_str(), primary]
                    .into_iter()
                    .find_map(|candidate| self.messages.get_key_value(candidate))
                    .map(|(language, _)| language.as_str())
            })
            .unwrap_or(self.default_language.as_str())
    }
}

impl Localize for Catalog {
    fn localize(&self, ctx: &RequestContext, code: &str) -> Result<String, LocalizeError> {
        let language = self.negotiate(&ctx.accepted_languages());

        self.lookup(language, code)
            .or_else(|| self.lookup(&self.default_language, code))
            .map(str::to_owned)
            .ok_or_else(|| LocalizeError::MissingMessage {
                code: code.to_owned(),
                language: language.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use http::header::ACCEPT_LANGUAGE;

    use super::*;

    fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    fn catalog() -> Catalog {
        let mut messages = HashMap::new();
        messages.insert(
            "en".to_string(),
            table(&[("CUS001", "Custom error"), ("CUS002", "Only in English")]),
        );
        messages.insert("th".to_string(), table(&[("CUS001", "ข้อผิดพลาดที่กำหนดเอง")]));
        Catalog::from_messages("en", messages).unwrap()
    }

    fn ctx(accept_language: &str) -> RequestContext {
        let (parts, ()) = http::Request::builder()
            .header(ACCEPT_LANGUAGE, accept_language)
            .body(())
            .unwrap()
            .into_parts();
        RequestContext::new(parts)
    }

    #[test]
    fn negotiates_regional_tags_to_primary_language() {
        let catalog = catalog();
        assert_eq!(catalog.negotiate(&["th-th".to_string()]), "th");
        assert_eq!(catalog.negotiate(&["de".to_string(), "th".to_string()]), "th");
        assert_eq!(catalog.negotiate(&["de".to_string()]), "en");
        assert_eq!(catalog.negotiate(&[]), "en");
    }

    #[test]
    fn localizes_using_accept_language() {
        let catalog = catalog();
        assert_eq!(catalog.localize(&ctx("th"), "CUS001").unwrap(), "ข้อผิดพลาดที่กำหนดเอง");
        assert_eq!(catalog.localize(&ctx("en-US"), "CUS001").unwrap(), "Custom error");
        assert_eq!(catalog.localize(&RequestContext::empty(), "CUS001").unwrap(), "Custom error");
    }

    #[test]
    fn missing_entries_use_default_language() {
        assert_eq!(catalog().localize(&ctx("th"), "CUS002").unwrap(), "Only in English");
    }

    #[test]
    fn unknown_code_is_an_error() {
        let err = catalog().localize(&ctx("th"), "NOPE").unwrap_err();
        assert!(matches!(err, LocalizeError::MissingMessage { ref code, ref language } if code == "NOPE" && language == "th"));
    }

    #[test]
    fn default_language_must_have_a_table() {
        let err = Catalog::from_messages("fr", HashMap::new()).unwrap_err();
        assert!(matches!(err, CatalogError::MissingDefault(ref lang) if lang == "fr"));
    }

    #[test]
    fn loads_catalog_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.toml"), "CUS001 = \"Custom error\"\n").unwrap();
        std::fs::write(dir.path().join("th.toml"), "CUS001 = \"ผิดพลาด\"\n").unwrap();

        let languages = vec!["th".to_string(), "en".to_string()];
        let catalog = Catalog::load(dir.path(), &languages, "en").unwrap();

        assert_eq!(catalog.default_language(), "en");
        assert_eq!(catalog.lookup("th", "CUS001"), Some("ผิดพลาด"));
        assert_eq!(catalog.lookup("en", "CUS001"), Some("Custom error"));
    }

    #[test]
    fn reports_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(dir.path(), &["en".to_string()], "en").unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));

        std::fs::write(dir.path().join("en.toml"), "CUS001 = [1, 2]\n").unwrap();
        let err = Catalog::load(dir.path(), &["en".to_string()], "en").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
