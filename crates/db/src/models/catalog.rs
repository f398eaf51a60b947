//! Catalog introspection rows.

use serde::Serialize;
use sqlx::FromRow;

/// A base table of the current schema.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TableName {
    pub table_name: String,
}
