//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no presentation behaviour.
//! The response envelope lives in the `api` crate.

use serde::Serialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// leads
// ---------------------------------------------------------------------------

/// A persisted lead row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct LeadRow {
    pub id: i64,
    /// Creation timestamp exactly as the store renders it as text.
    /// A NULL column stays `None` and serialises as `null`.
    pub created: Option<String>,
    pub customer: Option<String>,
    /// Cluster label assigned to the lead, if any.
    pub cluster: Option<String>,
}

/// Outcome of reading the whole `leads` table.
///
/// An empty table is a normal outcome, not an error, so it gets its own
/// variant instead of a `DbError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadFetch {
    /// One or more rows, in the order the store returned them.
    Found(Vec<LeadRow>),
    /// The table holds no rows.
    Empty,
}

impl LeadFetch {
    /// Wrap a batch of rows, collapsing an empty batch into [`LeadFetch::Empty`].
    pub fn from_rows(rows: Vec<LeadRow>) -> Self {
        if rows.is_empty() {
            Self::Empty
        } else {
            Self::Found(rows)
        }
    }

    /// Number of rows read.
    pub fn len(&self) -> usize {
        match self {
            Self::Found(rows) => rows.len(),
            Self::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Consume the result, yielding an empty vector for [`LeadFetch::Empty`].
    pub fn into_records(self) -> Vec<LeadRow> {
        match self {
            Self::Found(rows) => rows,
            Self::Empty => Vec::new(),
        }
    }
}
