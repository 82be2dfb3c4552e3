//! Order Model
//!
//! An order owns its order_item and payment rows exclusively: the repository
//! deletes them together with the order in one transaction.

use super::payment::PaymentMethod;
use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type OrderId = RecordId;

/// Order lifecycle status
///
/// Placement always starts at `Pending`; later transitions come from the
/// operational side and carry no transition rules here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Storage form, matches the serde wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<OrderId>,
    /// Opaque id of the ordering user
    pub user_id: String,
    pub delivery_address: String,
    /// Always equals the sum of the order's line totals once placement commits
    pub total_amount: f64,
    pub status: OrderStatus,
    /// Placement time, unix millis
    pub order_date: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Order line entity
///
/// `price` is the menu item's unit price snapshotted at placement time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    /// Owning order (record link; named order_id because ORDER is a keyword)
    #[serde(with = "serde_helpers::record_id")]
    pub order_id: RecordId,
    /// Referenced menu item (not owned)
    #[serde(with = "serde_helpers::record_id")]
    pub menu_item: RecordId,
    /// Denormalized dish name, stable against menu renames
    pub menu_item_name: String,
    pub quantity: i64,
    pub price: f64,
    pub created_at: i64,
}

// =============================================================================
// Detail DTOs (string ids, assembled by the repository detail query)
// =============================================================================

/// One line of an order detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemLine {
    pub item_id: String,
    pub menu_item_id: String,
    pub menu_item_name: String,
    pub quantity: i64,
    pub price: f64,
}

/// One payment of an order detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentLine {
    pub payment_id: String,
    pub method: PaymentMethod,
    pub amount: f64,
    pub status: String,
    #[serde(default)]
    pub transaction_id: Option<String>,
    pub payment_date: i64,
}

/// Full order aggregate: the order with its items and payments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    pub order_id: String,
    pub user_id: String,
    pub delivery_address: String,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub order_date: i64,
    #[serde(default)]
    pub items: Vec<OrderItemLine>,
    #[serde(default)]
    pub payments: Vec<PaymentLine>,
}
