use std::sync::Arc;

use shelf_api::Shelf;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Shelf HTTP server.
pub struct ShelfServer {
    config: ServerConfig,
    shelf: Arc<Shelf>,
}

impl ShelfServer {
    /// A server over a fresh in-memory shelf.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_shelf(config, Arc::new(Shelf::in_memory()))
    }

    pub fn with_shelf(config: ServerConfig, shelf: Arc<Shelf>) -> Self {
        Self { config, shelf }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn shelf(&self) -> &Arc<Shelf> {
        &self.shelf
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.shelf.clone(), &self.config)
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!("Shelf server listening on {}", listener.local_addr()?);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
