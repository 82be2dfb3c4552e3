//! Repository Module
//!
//! Provides CRUD operations for the SurrealDB tables. One repository per
//! entity; multi-row invariants (order aggregate writes, cascade deletes)
//! run inside a single multi-statement transaction.

pub mod menu_item;
pub mod order;
pub mod payment;
pub mod restaurant;

// Re-exports
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use payment::PaymentRepository;
pub use restaurant::RestaurantRepository;

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================
//
// 使用 surrealdb::RecordId 处理所有 ID：
//   - 解析: let id: RecordId = "order:123".parse()?;
//   - CRUD: db.select(id) / db.delete(id) 直接使用 RecordId
//
// API 层既接受 "table:id" 也接受裸 key；parse_id 统一归一化。

/// Parse an id from the API into a `RecordId` of the expected table.
///
/// Accepts the full "table:key" form or a bare key. Numeric keys stay
/// numeric so that snowflake-keyed records round-trip.
pub fn parse_id(table: &str, raw: &str) -> RepoResult<RecordId> {
    if raw.contains(':') {
        let rid: RecordId = raw
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid id format: {raw}")))?;
        if rid.table() != table {
            return Err(RepoError::Validation(format!(
                "Expected a {table} id, got: {raw}"
            )));
        }
        Ok(rid)
    } else if let Ok(n) = raw.parse::<i64>() {
        Ok(RecordId::from_table_key(table, n))
    } else {
        Ok(RecordId::from_table_key(table, raw))
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
