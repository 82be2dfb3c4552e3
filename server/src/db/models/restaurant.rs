//! Restaurant Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type RestaurantId = RecordId;

/// Restaurant model
///
/// Soft-deleted restaurants stay in the table with `is_deleted = true`;
/// the repository filters them out of every read path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RestaurantId>,
    pub name: String,
    /// Opaque id of the owning user (identity is an external concern)
    pub owner_id: String,
    pub address: String,
    pub phone_number: String,
    pub email: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_deleted: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub owner_id: String,
    pub address: String,
    pub phone_number: String,
    pub email: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
}
