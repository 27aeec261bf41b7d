//! Lead read operations.

use sqlx::AnyPool;
use tracing::{debug, instrument};

use crate::{DbError, models::{LeadFetch, LeadRow}};

/// `created` is cast to text so every backend hands it back verbatim.
const SELECT_ALL_LEADS: &str =
    "SELECT id, CAST(created AS TEXT) AS created, customer, cluster FROM leads";

/// Return every lead in the store's native row order.
///
/// A single connection is checked out for the duration of the call and goes
/// back to the pool when `conn` drops, whichever way the function exits.
#[instrument(skip(pool))]
pub async fn fetch_all(pool: &AnyPool) -> Result<LeadFetch, DbError> {
    let mut conn = pool.acquire().await?;

    let rows = sqlx::query_as::<_, LeadRow>(SELECT_ALL_LEADS)
        .fetch_all(&mut *conn)
        .await?;

    debug!(rows = rows.len(), "fetched leads");
    Ok(LeadFetch::from_rows(rows))
}
