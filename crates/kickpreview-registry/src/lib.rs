//! Kick Preview registry service.
//!
//! Two endpoints over the `tracks` table: `GET /api/get-content` returns one
//! pseudo-randomly chosen track, `PUT /api/put-content` registers a new one.

pub mod db;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

/// Initialize tracing for the registry binary.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
