use std::convert::Infallible;

use axum::Extension;
use axum::extract::FromRequestParts;
use axum::response::Response;
use http::request::Parts;
use verdict_core::Fault;

use crate::{RequestContext, Responder};

/// Layer that makes `responder` available to the [`Respond`] extractor
pub fn responder_layer(responder: Responder) -> Extension<Responder> {
    Extension(responder)
}

/// A [`Responder`] bound to the current request
///
/// Extract it in a handler to turn errors into responses with the
/// application's fallback handler and localization. Without
/// [`responder_layer`] the default responder is used.
#[derive(Debug, Clone)]
pub struct Respond {
    responder: Responder,
    ctx: RequestContext,
}

impl Respond {
    /// Bind `responder` to the request described by `ctx`
    pub const fn new(responder: Responder, ctx: RequestContext) -> Self {
        Self { responder, ctx }
    }

    /// Request this handle answers
    pub const fn context(&self) -> &RequestContext {
        &self.ctx
    }

    /// Write the response for `fault`
    pub fn respond(&self, fault: impl Into<Fault>) -> Response {
        self.responder.respond(&self.ctx, fault)
    }
}

impl<S> FromRequestParts<S> for Respond
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let responder = parts.extensions.get::<Responder>().cloned().unwrap_or_default();
        let ctx = parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_else(|| RequestContext::new(parts.clone()));

        Ok(Self::new(responder, ctx))
    }
}
