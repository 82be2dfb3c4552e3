//! Shared fixtures for integration tests

#![allow(dead_code)]

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tiffin_server::DbService;
use tiffin_server::db::models::{MenuItem, MenuItemCreate, Restaurant, RestaurantCreate};
use tiffin_server::db::repository::{MenuItemRepository, RestaurantRepository};

/// Fresh in-memory database
pub async fn mem_db() -> Surreal<Db> {
    DbService::memory().await.unwrap().db
}

pub async fn seed_restaurant(db: &Surreal<Db>) -> Restaurant {
    seed_restaurant_named(db, "Spice Route").await
}

pub async fn seed_restaurant_named(db: &Surreal<Db>, name: &str) -> Restaurant {
    RestaurantRepository::new(db.clone())
        .create(RestaurantCreate {
            name: name.to_string(),
            owner_id: "user:owner-1".to_string(),
            address: "12 Fort Road".to_string(),
            phone_number: "+91-9000000001".to_string(),
            email: "owner@spiceroute.example".to_string(),
            description: None,
        })
        .await
        .unwrap()
}

pub async fn seed_menu_item(
    db: &Surreal<Db>,
    restaurant: &Restaurant,
    name: &str,
    price: f64,
    available: bool,
) -> MenuItem {
    MenuItemRepository::new(db.clone())
        .create(MenuItemCreate {
            restaurant: restaurant.id.clone().unwrap(),
            name: name.to_string(),
            description: None,
            price,
            availability: Some(available),
            preparation_minutes: None,
        })
        .await
        .unwrap()
}

/// "table:key" form of a record's id
pub fn id_str(id: &Option<surrealdb::RecordId>) -> String {
    id.clone().unwrap().to_string()
}

/// Total number of rows in a table
pub async fn count_rows(db: &Surreal<Db>, table: &str) -> i64 {
    #[derive(serde::Deserialize)]
    struct Row {
        count: i64,
    }
    let rows: Vec<Row> = db
        .query(format!("SELECT count() AS count FROM {table} GROUP ALL"))
        .await
        .unwrap()
        .take(0)
        .unwrap();
    rows.first().map(|r| r.count).unwrap_or(0)
}
