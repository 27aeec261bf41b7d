//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// Connectivity or query failure reported by the driver.
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
