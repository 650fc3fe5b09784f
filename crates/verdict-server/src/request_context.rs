use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::RequestContext;

/// Middleware that stores a `RequestContext` in the request extensions
///
/// The context is what localizers and fallback handlers see when an error is
/// dispatched from a handler.
pub async fn request_context_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let context = RequestContext::new(parts.clone());

    let mut request = Request::from_parts(parts, body);
    request.extensions_mut().insert(context);

    next.run(request).await
}
