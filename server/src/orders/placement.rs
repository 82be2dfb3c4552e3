//! Order placement
//!
//! Builds the order aggregate: validates the selection against the catalog,
//! snapshots unit prices, accumulates the total in `Decimal`, and hands the
//! whole aggregate to the repository as one transactional write.

use crate::db::models::{MenuItem, OrderDetail};
use crate::db::repository::order::NewOrderLine;
use crate::db::repository::{
    MenuItemRepository, OrderRepository, RestaurantRepository, parse_id,
};
use crate::orders::money;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use rust_decimal::Decimal;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

/// Resolves how many units a selected menu item contributes to the order.
pub trait QuantityPolicy: Send + Sync {
    fn quantity_for(&self, menu_item: &MenuItem) -> i64;
}

/// One unit per distinct selected item.
///
/// This matches the shipped ordering flow, where selecting a dish always
/// means one of it. A per-item quantity picker would plug in here.
pub struct OneEach;

impl QuantityPolicy for OneEach {
    fn quantity_for(&self, _menu_item: &MenuItem) -> i64 {
        1
    }
}

/// Input to order placement. `user_id` is always explicit — there is no
/// ambient "current user" at this layer.
#[derive(Debug, Clone)]
pub struct PlaceOrderInput {
    pub restaurant_id: String,
    pub user_id: String,
    pub delivery_address: String,
    pub item_ids: Vec<String>,
}

/// Order aggregate builder
#[derive(Clone)]
pub struct OrderPlacement {
    restaurants: RestaurantRepository,
    menu_items: MenuItemRepository,
    orders: OrderRepository,
}

impl OrderPlacement {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            restaurants: RestaurantRepository::new(db.clone()),
            menu_items: MenuItemRepository::new(db.clone()),
            orders: OrderRepository::new(db),
        }
    }

    /// Place an order with the default one-unit-per-item policy
    pub async fn place(&self, input: PlaceOrderInput) -> AppResult<OrderDetail> {
        self.place_with_policy(input, &OneEach).await
    }

    /// Place an order.
    ///
    /// All validation happens before any write; the write itself is a single
    /// transaction, so a failure at any point leaves no order or line rows.
    pub async fn place_with_policy(
        &self,
        input: PlaceOrderInput,
        policy: &dyn QuantityPolicy,
    ) -> AppResult<OrderDetail> {
        validate_required_text(&input.user_id, "user_id", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&input.delivery_address, "delivery_address", MAX_ADDRESS_LEN)?;
        if input.item_ids.is_empty() {
            return Err(AppError::validation(
                "at least one menu item must be selected",
            ));
        }

        let restaurant = self
            .restaurants
            .find_by_id(&input.restaurant_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Restaurant {} not found", input.restaurant_id))
            })?;
        let restaurant_id = restaurant
            .id
            .clone()
            .ok_or_else(|| AppError::internal("restaurant record without id"))?;

        // Selection is a set: repeated ids collapse to one line
        let mut selected: Vec<RecordId> = Vec::new();
        for raw in &input.item_ids {
            let rid = parse_id("menu_item", raw).map_err(AppError::from)?;
            if !selected.contains(&rid) {
                selected.push(rid);
            }
        }

        let fetched = self.menu_items.find_many(&selected).await?;

        let mut lines: Vec<NewOrderLine> = Vec::with_capacity(selected.len());
        let mut total = Decimal::ZERO;
        for rid in &selected {
            let item = fetched
                .iter()
                .find(|m| m.id.as_ref() == Some(rid))
                .ok_or_else(|| AppError::not_found(format!("Menu item {} not found", rid)))?;

            if item.restaurant != restaurant_id {
                return Err(AppError::invalid_selection(format!(
                    "Menu item {} does not belong to restaurant {}",
                    rid, restaurant_id
                )));
            }
            if !item.availability {
                return Err(AppError::invalid_selection(format!(
                    "Menu item {} is not available",
                    rid
                )));
            }

            let quantity = policy.quantity_for(item);
            if quantity < 1 {
                return Err(AppError::validation(format!(
                    "quantity for menu item {} must be at least 1, got {}",
                    rid, quantity
                )));
            }

            total += money::line_total(item.price, quantity);
            lines.push(NewOrderLine {
                menu_item: rid.clone(),
                menu_item_name: item.name.clone(),
                quantity,
                price: item.price,
            });
        }

        let total_amount = money::to_f64(total);
        let order_id = self
            .orders
            .create_with_items(
                input.user_id.clone(),
                input.delivery_address,
                &lines,
                total_amount,
            )
            .await?;

        tracing::info!(
            order_id = %order_id,
            user_id = %input.user_id,
            items = lines.len(),
            total = total_amount,
            "Order placed"
        );

        Ok(self.orders.get_order_detail(&order_id.to_string()).await?)
    }
}
