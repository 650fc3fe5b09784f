use thiserror::Error;

use crate::RequestContext;

/// Failure to produce a localized message
///
/// The dispatcher never surfaces these; the message is left as it was.
#[derive(Debug, Error)]
pub enum LocalizeError {
    /// No message registered for the code in any usable language
    #[error("no message for `{code}` in language `{language}`")]
    MissingMessage { code: String, language: String },

    /// Localization backend failed
    #[error("localization failed: {0}")]
    Backend(String),
}

/// Turns an error code into a message for the requesting client
pub trait Localize: Send + Sync {
    /// Localized message for `code`, chosen using the request in `ctx`
    ///
    /// # Errors
    ///
    /// Returns an error when no message can be produced
    fn localize(&self, ctx: &RequestContext, code: &str) -> Result<String, LocalizeError>;
}

impl<F> Localize for F
where
    F: Fn(&RequestContext, &str) -> Result<String, LocalizeError> + Send + Sync,
{
    fn localize(&self, ctx: &RequestContext, code: &str) -> Result<String, LocalizeError> {
        self(ctx, code)
    }
}
