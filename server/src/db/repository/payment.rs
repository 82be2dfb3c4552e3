//! Payment Repository
//!
//! transaction_id 唯一性在应用层检查（字段可选，无法用唯一索引表达）。

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::{Payment, PaymentMethod};
use crate::utils::{now_millis, snowflake_id};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const PAYMENT_TABLE: &str = "payment";

#[derive(Clone)]
pub struct PaymentRepository {
    base: BaseRepository,
}

impl PaymentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a payment row against an order
    ///
    /// The caller has already checked the amount against the order total;
    /// this only guards transaction_id uniqueness.
    pub async fn create(
        &self,
        order: RecordId,
        method: PaymentMethod,
        amount: f64,
        transaction_id: Option<String>,
    ) -> RepoResult<Payment> {
        if let Some(ref txn) = transaction_id {
            if self.find_by_transaction_id(txn).await?.is_some() {
                return Err(RepoError::Duplicate(format!(
                    "Payment with transaction id {} already exists",
                    txn
                )));
            }
        }

        let now = now_millis();
        let payment = Payment {
            id: None,
            order_id: order,
            method,
            amount,
            status: "pending".to_string(),
            transaction_id,
            payment_date: now,
            created_at: now,
        };

        let created: Option<Payment> = self
            .base
            .db()
            .create(RecordId::from_table_key(PAYMENT_TABLE, snowflake_id()))
            .content(payment)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create payment".to_string()))
    }

    /// Look up a payment by gateway transaction id
    pub async fn find_by_transaction_id(&self, txn: &str) -> RepoResult<Option<Payment>> {
        let payments: Vec<Payment> = self
            .base
            .db()
            .query("SELECT * FROM payment WHERE transaction_id = $txn")
            .bind(("txn", txn.to_string()))
            .await?
            .take(0)?;
        Ok(payments.into_iter().next())
    }

    /// 按订单查询支付记录
    pub async fn list_by_order(&self, order_id: &str) -> RepoResult<Vec<Payment>> {
        let order = parse_id("order", order_id)?;
        let payments: Vec<Payment> = self
            .base
            .db()
            .query("SELECT * FROM payment WHERE order_id = $order ORDER BY payment_date ASC")
            .bind(("order", order))
            .await?
            .take(0)?;
        Ok(payments)
    }
}
