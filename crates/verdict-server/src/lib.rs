//! HTTP dispatch for Verdict errors
//!
//! [`Responder`] turns a [`Fault`](verdict_core::Fault) into an axum
//! response: status taxonomy errors map straight to their status, other
//! errors go through optional message localization and the application's
//! [`Fallback`] handler, with a generic `400 Bad Request` as the last resort.

#![allow(clippy::must_use_candidate)]

pub mod catalog;
mod context;
pub mod demo;
mod extract;
mod fallback;
mod health;
mod localize;
mod request_context;
mod responder;

use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;
use verdict_config::{Config, I18nConfig};

pub use catalog::{Catalog, CatalogError};
pub use context::RequestContext;
pub use extract::{Respond, responder_layer};
pub use fallback::Fallback;
pub use localize::{Localize, LocalizeError};
pub use request_context::request_context_middleware;
pub use responder::{DispatchConfig, I18n, Responder};

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if i18n is enabled and the message catalogs cannot
    /// be loaded
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let responder = build_responder(&config.i18n)?;

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        app = app.merge(demo::demo_router());

        // Request context (innermost, runs just before handlers)
        app = app.layer(axum::middleware::from_fn(request_context::request_context_middleware));

        app = app.layer(responder_layer(responder));

        app = app.layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// Responder used by the demo routes
fn build_responder(config: &I18nConfig) -> anyhow::Result<Responder> {
    let mut dispatch = DispatchConfig::default().with_fallback(demo::DemoFallback);

    if config.enabled {
        let root = config
            .root_path
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("i18n.root_path is required when i18n is enabled"))?;

        let catalog = Catalog::load(root, &config.accept_languages, &config.default_language)?;
        tracing::info!(
            languages = ?config.accept_languages,
            default = %catalog.default_language(),
            "message catalogs loaded"
        );

        dispatch = dispatch.with_i18n(I18n::new(catalog));
    }

    Ok(Responder::new(dispatch))
}
