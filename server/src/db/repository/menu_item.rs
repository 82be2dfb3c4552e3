//! Menu Item Repository

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use crate::utils::now_millis;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const MENU_ITEM_TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find menu item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let rid = parse_id(MENU_ITEM_TABLE, id)?;
        let item: Option<MenuItem> = self.base.db().select(rid).await?;
        Ok(item)
    }

    /// Find all menu items of a restaurant, optionally only orderable ones
    pub async fn find_by_restaurant(
        &self,
        restaurant_id: &str,
        available_only: bool,
    ) -> RepoResult<Vec<MenuItem>> {
        let restaurant = parse_id("restaurant", restaurant_id)?;
        let query = if available_only {
            "SELECT * FROM menu_item WHERE restaurant = $restaurant AND availability = true ORDER BY name"
        } else {
            "SELECT * FROM menu_item WHERE restaurant = $restaurant ORDER BY name"
        };
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query(query)
            .bind(("restaurant", restaurant))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Fetch a batch of menu items by id (order placement selection)
    ///
    /// Missing ids simply produce a shorter result; the caller decides what
    /// an absent item means.
    pub async fn find_many(&self, ids: &[RecordId]) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE id IN $ids")
            .bind(("ids", ids.to_vec()))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Create a new menu item
    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        let now = now_millis();
        let item = MenuItem {
            id: None,
            restaurant: data.restaurant,
            name: data.name,
            description: data.description,
            price: data.price,
            availability: data.availability.unwrap_or(true),
            preparation_minutes: data.preparation_minutes,
            created_at: now,
            updated_at: now,
        };

        let created: Option<MenuItem> = self
            .base
            .db()
            .create(MENU_ITEM_TABLE)
            .content(item)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    /// Update a menu item (price changes do not touch placed orders)
    pub async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        let rid = parse_id(MENU_ITEM_TABLE, id)?;

        let mut set_parts: Vec<&str> = Vec::new();
        if data.name.is_some() {
            set_parts.push("name = $name");
        }
        if data.description.is_some() {
            set_parts.push("description = $description");
        }
        if data.price.is_some() {
            set_parts.push("price = $price");
        }
        if data.availability.is_some() {
            set_parts.push("availability = $availability");
        }
        if data.preparation_minutes.is_some() {
            set_parts.push("preparation_minutes = $preparation_minutes");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)));
        }
        set_parts.push("updated_at = $updated_at");

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self
            .base
            .db()
            .query(query_str)
            .bind(("thing", rid))
            .bind(("updated_at", now_millis()));
        if let Some(v) = data.name {
            query = query.bind(("name", v));
        }
        if let Some(v) = data.description {
            query = query.bind(("description", v));
        }
        if let Some(v) = data.price {
            query = query.bind(("price", v));
        }
        if let Some(v) = data.availability {
            query = query.bind(("availability", v));
        }
        if let Some(v) = data.preparation_minutes {
            query = query.bind(("preparation_minutes", v));
        }

        let items: Vec<MenuItem> = query.await?.take(0)?;
        items
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }
}
