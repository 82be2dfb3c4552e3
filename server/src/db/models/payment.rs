//! Payment Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type PaymentId = RecordId;

/// Payment method
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    NetBanking,
    CashOnDelivery,
    Upi,
}

/// Payment entity
///
/// `amount` equals the order total at creation time; `status` is free-form
/// because downstream gateways report their own vocabularies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<PaymentId>,
    /// Owning order (record link; named order_id because ORDER is a keyword)
    #[serde(with = "serde_helpers::record_id")]
    pub order_id: RecordId,
    pub method: PaymentMethod,
    pub amount: f64,
    #[serde(default = "default_status")]
    pub status: String,
    /// Gateway reference, unique when present
    #[serde(default)]
    pub transaction_id: Option<String>,
    pub payment_date: i64,
    pub created_at: i64,
}

fn default_status() -> String {
    "pending".to_string()
}
