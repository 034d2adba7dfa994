// Portal server module
// HTTP surface: static demo pages plus the AI navigation endpoint

mod handlers;
mod pages;

pub use handlers::{create_router, AiRouteRequest, AiRouteResponse};

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::catalog::RouteCatalog;
use crate::router::IntentRouter;

/// Configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8000")
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
        }
    }
}

/// The Tudo Num portal server
pub struct PortalServer {
    /// Route catalog (shared, read-only)
    catalog: Arc<RouteCatalog>,
    /// Intent router backing /api/ai-route
    intents: IntentRouter,
    /// Server configuration
    config: ServerConfig,
}

impl PortalServer {
    pub fn new(catalog: Arc<RouteCatalog>, intents: IntentRouter, config: ServerConfig) -> Self {
        Self {
            catalog,
            intents,
            config,
        }
    }

    /// Start the HTTP server
    pub async fn serve(self) -> Result<()> {
        let addr: SocketAddr = self.config.bind_address.parse()?;

        let app_state = Arc::new(self);
        let app = create_router(app_state).layer(TraceLayer::new_for_http());

        tracing::info!("Starting Tudo Num portal on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Get reference to the route catalog
    pub fn catalog(&self) -> &Arc<RouteCatalog> {
        &self.catalog
    }

    /// Get reference to the intent router
    pub fn intents(&self) -> &IntentRouter {
        &self.intents
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
