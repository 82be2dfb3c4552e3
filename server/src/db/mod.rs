//! Database Module
//!
//! Owns the embedded SurrealDB instance (RocksDB on disk, in-memory for
//! tests) and applies the schema definitions on startup.

pub mod models;
pub mod repository;

use crate::utils::AppError;
use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "tiffin";
const DATABASE: &str = "tiffin";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database at `db_path`
    pub async fn new(db_path: &Path) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::init(&db).await?;
        tracing::info!(path = %db_path.display(), "Database connection established (RocksDB)");
        Ok(Self { db })
    }

    /// In-memory database for tests
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
        Self::init(&db).await?;
        Ok(Self { db })
    }

    async fn init(db: &Surreal<Db>) -> Result<(), AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        // Query-path indexes. Uniqueness of payment.transaction_id is enforced
        // at the repository level because the column is optional.
        db.query(
            r#"
            DEFINE INDEX IF NOT EXISTS order_user_date ON order FIELDS user_id, order_date;
            DEFINE INDEX IF NOT EXISTS order_item_order ON order_item FIELDS order_id;
            DEFINE INDEX IF NOT EXISTS payment_order ON payment FIELDS order_id;
            "#,
        )
        .await
        .map_err(|e| AppError::database(format!("Failed to define indexes: {e}")))?;

        Ok(())
    }
}
