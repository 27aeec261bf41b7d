//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   GET /api/v1/leads

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

use db::DbPool;

pub mod handlers;
pub mod response;

pub use response::{LeadsResponse, NO_RECORDS_MESSAGE};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/leads", get(handlers::leads::list))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve the API until the process is stopped.
pub async fn serve(addr: &str, pool: DbPool) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API listening on {}", listener.local_addr()?);
    axum::serve(listener, router(AppState { pool })).await
}
