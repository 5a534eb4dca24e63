use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use shelf_api::Shelf;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handler;

/// Build the axum router with all Shelf endpoints.
pub fn build_router(shelf: Arc<Shelf>, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(handler::health_handler))
        .route("/info", get(handler::info_handler))
        .route(
            "/apis/:package/:version/:plural",
            get(handler::list_handler).post(handler::create_handler),
        )
        .route(
            "/apis/:package/:version/:plural/:name",
            get(handler::get_handler)
                .put(handler::replace_handler)
                .patch(handler::patch_handler)
                .delete(handler::delete_handler),
        )
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(shelf)
}
