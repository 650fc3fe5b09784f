use std::sync::OnceLock;

use regex::{Captures, Regex};

/// `{{ env.NAME }}` with an optional `| default("value")`
fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([A-Za-z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#).expect("must be valid regex")
    })
}

/// Substitute environment placeholders in raw config text
///
/// Comment lines are copied verbatim so documented-but-unused variables do
/// not have to be set.
pub fn expand_env(input: &str) -> anyhow::Result<String> {
    let mut output = String::with_capacity(input.len());

    for line in input.split_inclusive('\n') {
        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut failure = None;
        let expanded = placeholder().replace_all(line, |caps: &Captures<'_>| match resolve(caps) {
            Ok(value) => value,
            Err(e) => {
                failure.get_or_insert(e);
                String::new()
            }
        });

        if let Some(e) = failure {
            return Err(e);
        }
        output.push_str(&expanded);
    }

    Ok(output)
}

fn resolve(caps: &Captures<'_>) -> anyhow::Result<String> {
    let key = &caps[1];
    let Some(name) = key.strip_prefix("env.").filter(|name| !name.contains('.')) else {
        anyhow::bail!("only variables scoped with 'env.' are supported: `{key}`");
    };

    match (std::env::var(name), caps.get(2)) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(default)) => Ok(default.as_str().to_owned()),
        (Err(_), None) => anyhow::bail!("environment variable not found: `{name}`"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let input = "[server]\nlisten_address = \"127.0.0.1:3000\"\n";
        assert_eq!(expand_env(input).unwrap(), input);
    }

    #[test]
    fn substitutes_set_variables() {
        temp_env::with_vars([("VERDICT_ROOT", Some("/srv/i18n")), ("VERDICT_LANG", Some("th"))], || {
            let result = expand_env("root_path = \"{{ env.VERDICT_ROOT }}\"\nlang = \"{{env.VERDICT_LANG}}\"").unwrap();
            assert_eq!(result, "root_path = \"/srv/i18n\"\nlang = \"th\"");
        });
    }

    #[test]
    fn missing_variable_is_an_error() {
        temp_env::with_var_unset("VERDICT_MISSING", || {
            let err = expand_env("key = \"{{ env.VERDICT_MISSING }}\"").unwrap_err();
            assert!(err.to_string().contains("VERDICT_MISSING"));
        });
    }

    #[test]
    fn default_applies_only_when_unset() {
        temp_env::with_var_unset("VERDICT_OPTIONAL", || {
            let result = expand_env("key = \"{{ env.VERDICT_OPTIONAL | default(\"en\") }}\"").unwrap();
            assert_eq!(result, "key = \"en\"");
        });

        temp_env::with_var("VERDICT_OPTIONAL", Some("th"), || {
            let result = expand_env("key = \"{{ env.VERDICT_OPTIONAL | default(\"en\") }}\"").unwrap();
            assert_eq!(result, "key = \"th\"");
        });
    }

    #[test]
    fn other_scopes_are_rejected() {
        let err = expand_env("key = \"{{ vault.TOKEN }}\"").unwrap_err();
        assert!(err.to_string().contains("only variables scoped with 'env.'"));
    }

    #[test]
    fn comments_are_not_expanded() {
        temp_env::with_var_unset("VERDICT_MISSING", || {
            let input = "  # root_path = \"{{ env.VERDICT_MISSING }}\"\nenabled = true";
            assert_eq!(expand_env(input).unwrap(), input);
        });
    }
}
