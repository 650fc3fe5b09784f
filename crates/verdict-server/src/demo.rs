//! Routes exercising every dispatch path
//!
//! - `GET /status/{code}`: the taxonomy error for a numeric status. 1xx
//!   codes cannot be a final HTTP/1.1 response, so they take the generic
//!   `400 Bad Request` path like unknown codes
//! - `GET /custom`: a custom error localized and answered by [`DemoFallback`]
//! - `GET /failure`: an unstructured error the fallback declines

use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use thiserror::Error;
use verdict_core::{ErrorBody, Fault, Status, StatusClass, StatusError, StructuredError};

use crate::{Fallback, RequestContext, Respond};

/// Application error whose message comes from the catalog
#[derive(Debug, Error)]
#[error("custom error {}", .body.code)]
pub struct CustomError {
    body: ErrorBody,
}

impl CustomError {
    pub const CODE: &'static str = "CUS001";

    pub fn new() -> Self {
        Self {
            body: ErrorBody::pending(Self::CODE),
        }
    }
}

impl Default for CustomError {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuredError for CustomError {
    fn body(&self) -> &ErrorBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ErrorBody {
        &mut self.body
    }
}

/// Answers [`CustomError`] with `400` and its body; declines anything else
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoFallback;

impl Fallback for DemoFallback {
    fn respond(&self, _ctx: &RequestContext, fault: &Fault) -> Option<Response> {
        let custom = fault.downcast_ref::<CustomError>()?;
        Some((StatusCode::BAD_REQUEST, Json(custom.body())).into_response())
    }
}

pub fn demo_router() -> Router {
    Router::new()
        .route("/status/{code}", get(status_handler))
        .route("/custom", get(custom_handler))
        .route("/failure", get(failure_handler))
}

async fn status_handler(Path(code): Path<u16>, respond: Respond) -> Response {
    match Status::from_u16(code) {
        Some(status) if status.class() == StatusClass::Informational => {
            respond.respond(anyhow::anyhow!("informational status {code} is not a final response"))
        }
        Some(status) => respond.respond(StatusError::new(status)),
        None => respond.respond(anyhow::anyhow!("no status error for code {code}")),
    }
}

async fn custom_handler(respond: Respond) -> Response {
    respond.respond(Fault::structured(CustomError::new()))
}

async fn failure_handler(respond: Respond) -> Response {
    let err = anyhow::anyhow!("connection reset by peer").context("calling inventory service");
    respond.respond(err)
}
