//! HTTP server assembly
//!
//! Builds the axum router over an injected store and serves it until
//! shutdown. The frontend is plain static files under `static/`; the root
//! path redirects there, matching the original signup page behavior.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::response::Redirect;
use axum::routing::{delete, get, post};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

use crate::error::{ActivityError, ActivityResult};
use crate::traits::ActivityStore;
use crate::web::handlers::api;

/// Main server struct owning the store and the frontend location.
pub struct ActivityServer<S: ActivityStore> {
    store: Arc<S>,
    static_dir: PathBuf,
}

impl<S> ActivityServer<S>
where
    S: ActivityStore + 'static,
{
    pub fn new(store: S, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: Arc::new(store),
            static_dir: static_dir.into(),
        }
    }

    /// Build the axum router with all routes.
    pub fn build_router(&self) -> Router {
        Router::new()
            // Frontend
            .route(
                "/",
                get(|| async { Redirect::temporary("/static/index.html") }),
            )
            .nest_service("/static", ServeDir::new(&self.static_dir))
            // API routes
            .route("/activities", get(api::list_activities::<S>))
            .route(
                "/activities/:name/signup",
                post(api::signup_for_activity::<S>),
            )
            .route(
                "/activities/:name/participants",
                delete(api::unregister_participant::<S>),
            )
            // Health check
            .route("/health", get(api::health_check))
            .layer(
                ServiceBuilder::new()
                    .layer(CorsLayer::permissive()) // Allow CORS for development
                    .into_inner(),
            )
            .with_state(self.store.clone())
    }

    /// Bind the listener and serve until Ctrl+C.
    pub async fn run(&self, addr: SocketAddr) -> ActivityResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ActivityError::ServerStartup(format!("Failed to bind to {addr}: {e}")))?;

        info!("🌐 Activity server listening on http://{}", addr);
        info!("📋 Signup page at http://{}/static/index.html", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Activity server stopped gracefully");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
