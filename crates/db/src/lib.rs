//! `db` crate — pure persistence layer.
//!
//! Provides a connection pool, the typed lead row, and the read-only lead
//! repository.  No presentation logic lives here.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;

pub use pool::DbPool;
pub use error::DbError;
pub use models::{LeadFetch, LeadRow};
