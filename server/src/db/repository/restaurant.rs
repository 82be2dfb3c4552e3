//! Restaurant Repository

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::{Restaurant, RestaurantCreate, RestaurantUpdate};
use crate::utils::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const RESTAURANT_TABLE: &str = "restaurant";

#[derive(Clone)]
pub struct RestaurantRepository {
    base: BaseRepository,
}

impl RestaurantRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all restaurants that are not soft-deleted
    pub async fn find_all(&self) -> RepoResult<Vec<Restaurant>> {
        let restaurants: Vec<Restaurant> = self
            .base
            .db()
            .query("SELECT * FROM restaurant WHERE is_deleted = false ORDER BY name")
            .await?
            .take(0)?;
        Ok(restaurants)
    }

    /// Find restaurant by id. Soft-deleted restaurants read as absent.
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Restaurant>> {
        let rid = parse_id(RESTAURANT_TABLE, id)?;
        let restaurant: Option<Restaurant> = self.base.db().select(rid).await?;
        Ok(restaurant.filter(|r| !r.is_deleted))
    }

    /// Create a new restaurant
    pub async fn create(&self, data: RestaurantCreate) -> RepoResult<Restaurant> {
        let now = now_millis();
        let restaurant = Restaurant {
            id: None,
            name: data.name,
            owner_id: data.owner_id,
            address: data.address,
            phone_number: data.phone_number,
            email: data.email,
            description: data.description,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Restaurant> = self
            .base
            .db()
            .create(RESTAURANT_TABLE)
            .content(restaurant)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create restaurant".to_string()))
    }

    /// Update a restaurant
    pub async fn update(&self, id: &str, data: RestaurantUpdate) -> RepoResult<Restaurant> {
        let rid = parse_id(RESTAURANT_TABLE, id)?;

        // Build dynamic SET clauses with proper type bindings
        let mut set_parts: Vec<&str> = Vec::new();
        if data.name.is_some() {
            set_parts.push("name = $name");
        }
        if data.address.is_some() {
            set_parts.push("address = $address");
        }
        if data.phone_number.is_some() {
            set_parts.push("phone_number = $phone_number");
        }
        if data.email.is_some() {
            set_parts.push("email = $email");
        }
        if data.description.is_some() {
            set_parts.push("description = $description");
        }

        if set_parts.is_empty() {
            // No fields to update
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Restaurant {} not found", id)));
        }
        set_parts.push("updated_at = $updated_at");

        let query_str = format!(
            "UPDATE $thing SET {} WHERE is_deleted = false RETURN AFTER",
            set_parts.join(", ")
        );

        let mut query = self
            .base
            .db()
            .query(query_str)
            .bind(("thing", rid))
            .bind(("updated_at", now_millis()));
        if let Some(v) = data.name {
            query = query.bind(("name", v));
        }
        if let Some(v) = data.address {
            query = query.bind(("address", v));
        }
        if let Some(v) = data.phone_number {
            query = query.bind(("phone_number", v));
        }
        if let Some(v) = data.email {
            query = query.bind(("email", v));
        }
        if let Some(v) = data.description {
            query = query.bind(("description", v));
        }

        let restaurants: Vec<Restaurant> = query.await?.take(0)?;
        restaurants
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Restaurant {} not found", id)))
    }

    /// Soft delete a restaurant. The record stays for order history.
    pub async fn soft_delete(&self, id: &str) -> RepoResult<()> {
        let rid = parse_id(RESTAURANT_TABLE, id)?;
        let updated: Vec<Restaurant> = self
            .base
            .db()
            .query("UPDATE $thing SET is_deleted = true, updated_at = $now WHERE is_deleted = false RETURN AFTER")
            .bind(("thing", rid))
            .bind(("now", now_millis()))
            .await?
            .take(0)?;

        if updated.is_empty() {
            return Err(RepoError::NotFound(format!("Restaurant {} not found", id)));
        }
        Ok(())
    }
}
