use std::fmt;
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use verdict_core::{Fault, StatusError};

use crate::{Fallback, Localize, RequestContext, Respond};

/// Localization settings for custom error messages
#[derive(Clone)]
pub struct I18n {
    pub enabled: bool,
    pub localizer: Option<Arc<dyn Localize>>,
}

impl I18n {
    /// Enabled localization backed by `localizer`
    pub fn new(localizer: impl Localize + 'static) -> Self {
        Self {
            enabled: true,
            localizer: Some(Arc::new(localizer)),
        }
    }

    /// Enabled localization backed by a closure
    pub fn from_fn<F>(localize: F) -> Self
    where
        F: Fn(&RequestContext, &str) -> Result<String, crate::LocalizeError> + Send + Sync + 'static,
    {
        Self::new(localize)
    }

    /// Localization switched off
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            localizer: None,
        }
    }

    fn active_localizer(&self) -> Option<&dyn Localize> {
        if self.enabled { self.localizer.as_deref() } else { None }
    }
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("enabled", &self.enabled)
            .field("localizer", &self.localizer.is_some())
            .finish()
    }
}

/// Collaborators used for errors outside the status taxonomy
#[derive(Clone, Default)]
pub struct DispatchConfig {
    pub fallback: Option<Arc<dyn Fallback>>,
    pub i18n: Option<I18n>,
}

impl DispatchConfig {
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Fallback + 'static) -> Self {
        self.fallback = Some(Arc::new(fallback));
        self
    }

    #[must_use]
    pub fn with_fallback_fn<F>(self, fallback: F) -> Self
    where
        F: Fn(&RequestContext, &Fault) -> Option<Response> + Send + Sync + 'static,
    {
        self.with_fallback(fallback)
    }

    #[must_use]
    pub fn with_i18n(mut self, i18n: I18n) -> Self {
        self.i18n = Some(i18n);
        self
    }
}

impl fmt::Debug for DispatchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchConfig")
            .field("fallback", &self.fallback.is_some())
            .field("i18n", &self.i18n)
            .finish()
    }
}

/// Converts error values into HTTP responses
///
/// Built once per application and shared across requests; cloning is cheap
/// and the configuration cannot change after construction.
#[derive(Debug, Clone, Default)]
pub struct Responder {
    config: Arc<DispatchConfig>,
}

impl Responder {
    /// Freeze `config` into a shareable responder
    pub fn new(config: DispatchConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Configuration this responder dispatches with
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Bind the responder to one request
    pub fn with(&self, ctx: RequestContext) -> Respond {
        Respond::new(self.clone(), ctx)
    }

    /// Write the response for `fault`
    ///
    /// Status taxonomy errors always map to their own status and body, also
    /// when wrapped in `anyhow` or passed as a structured error. Any
    /// other error first has a pending message localized (only when a
    /// fallback handler is configured), then goes to the fallback handler.
    /// Without a fallback, or when it declines, the answer is a generic
    /// `400 Bad Request`.
    pub fn respond(&self, ctx: &RequestContext, fault: impl Into<Fault>) -> Response {
        let mut fault = match fault.into().normalize() {
            Fault::Status(e) => {
                tracing::trace!(status = %e.status(), "responding with status error");
                return e.into_response();
            }
            other => other,
        };

        if let Some(ref fallback) = self.config.fallback {
            self.localize_pending(ctx, &mut fault);

            if let Some(response) = fallback.respond(ctx, &fault) {
                tracing::debug!(status = %response.status(), "fallback handled error");
                return response;
            }
            tracing::debug!(error = %fault, "fallback declined error");
        }

        StatusError::bad_request().into_response()
    }

    /// Fill in a missing message from the error code
    ///
    /// Only bodies with a code and an empty message are touched. Failures
    /// keep the message as it was.
    fn localize_pending(&self, ctx: &RequestContext, fault: &mut Fault) {
        let Some(localizer) = self.config.i18n.as_ref().and_then(I18n::active_localizer) else {
            return;
        };

        let code = match fault.body() {
            Ok(body) if body.is_pending_localization() => body.code.clone(),
            _ => return,
        };

        match localizer.localize(ctx, &code) {
            Ok(message) => fault.set_message(message),
            Err(e) => tracing::debug!(%code, error = %e, "localization failed, keeping message"),
        }
    }
}
