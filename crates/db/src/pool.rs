//! Connection pool over sqlx's `Any` driver.
//!
//! The URL scheme picks the backend: `postgres://…` in deployment,
//! `sqlite:…` for local files and tests.

use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;
use tracing::info;

use crate::DbError;

/// Type alias for the shared pool used across the whole application.
pub type DbPool = AnyPool;

/// Create a new connection pool from the given `database_url`.
///
/// `max_connections` controls the pool ceiling.  At least one connection is
/// opened eagerly, so an unreachable store fails here rather than on the
/// first read.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, DbError> {
    install_default_drivers();

    info!("Connecting to database (max_connections={})", max_connections);
    let pool = AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}
