//! Payment recording
//!
//! A payment mirrors the order total exactly — partial and split payments
//! are not supported. Recording never advances the order status; status
//! progression belongs to the operational flow.

use crate::db::models::{Payment, PaymentMethod};
use crate::db::repository::{OrderRepository, PaymentRepository};
use crate::orders::money;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Input to payment recording
#[derive(Debug, Clone)]
pub struct RecordPaymentInput {
    pub method: PaymentMethod,
    pub amount: f64,
    pub transaction_id: Option<String>,
}

/// Payment recorder
#[derive(Clone)]
pub struct PaymentRecorder {
    orders: OrderRepository,
    payments: PaymentRepository,
}

impl PaymentRecorder {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            orders: OrderRepository::new(db.clone()),
            payments: PaymentRepository::new(db),
        }
    }

    /// Record a payment against an order.
    ///
    /// Fails with `AmountMismatch` when the amount disagrees with the order
    /// total by a cent or more.
    pub async fn record(&self, order_id: &str, input: RecordPaymentInput) -> AppResult<Payment> {
        money::validate_amount(input.amount, "payment amount")?;
        validate_optional_text(&input.transaction_id, "transaction_id", MAX_SHORT_TEXT_LEN)?;

        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {} not found", order_id)))?;

        if !money::money_eq(input.amount, order.total_amount) {
            return Err(AppError::amount_mismatch(format!(
                "payment of {:.2} does not match order total {:.2}",
                input.amount, order.total_amount
            )));
        }

        let oid = order
            .id
            .clone()
            .ok_or_else(|| AppError::internal("order record without id"))?;

        let payment = self
            .payments
            .create(oid.clone(), input.method, input.amount, input.transaction_id)
            .await?;

        tracing::info!(
            order_id = %oid,
            amount = payment.amount,
            method = ?payment.method,
            "Payment recorded"
        );

        Ok(payment)
    }
}
