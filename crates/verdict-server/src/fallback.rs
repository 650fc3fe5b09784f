use axum::response::Response;
use verdict_core::Fault;

use crate::RequestContext;

/// Application-supplied handler for errors outside the status taxonomy
///
/// Only sees [`Fault::Structured`] and [`Fault::Other`]; use
/// [`Fault::downcast_ref`] to recognise concrete error types. Returning
/// `None` declines, and the dispatcher answers with a generic bad request.
pub trait Fallback: Send + Sync {
    fn respond(&self, ctx: &RequestContext, fault: &Fault) -> Option<Response>;
}

impl<F> Fallback for F
where
    F: Fn(&RequestContext, &Fault) -> Option<Response> + Send + Sync,
{
    fn respond(&self, ctx: &RequestContext, fault: &Fault) -> Option<Response> {
        self(ctx, fault)
    }
}
