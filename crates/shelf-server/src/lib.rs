//! HTTP server for Shelf.
//!
//! Exposes the resource API as REST endpoints under
//! `/apis/:package/:version/:plural[/:name]`, plus `/health` and `/info`.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::ShelfServer;
