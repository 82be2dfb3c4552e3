//! Menu Item Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type MenuItemId = RecordId;

/// Menu item model
///
/// `price` is the live catalog price; order placement snapshots it into the
/// order line, so later edits never touch existing orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<MenuItemId>,
    /// Record link to the owning restaurant
    #[serde(with = "serde_helpers::record_id")]
    pub restaurant: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price, 2 decimal places
    pub price: f64,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub availability: bool,
    /// Preparation time in minutes
    #[serde(default)]
    pub preparation_minutes: Option<i32>,
    pub created_at: i64,
    pub updated_at: i64,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemCreate {
    /// Owning restaurant, "restaurant:id" form
    #[serde(with = "serde_helpers::record_id")]
    pub restaurant: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub availability: Option<bool>,
    pub preparation_minutes: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub availability: Option<bool>,
    pub preparation_minutes: Option<i32>,
}
