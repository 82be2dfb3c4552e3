//! Order Repository
//!
//! The order aggregate (order + order_item rows) is written and deleted in
//! single multi-statement transactions: readers never observe an order with
//! a provisional zero total next to its attached items, and deleting an
//! order always takes its items and payments with it.

use super::{BaseRepository, RepoError, RepoResult, parse_id};
use crate::db::models::{Order, OrderDetail, OrderStatus};
use crate::utils::{now_millis, snowflake_id};
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const ORDER_TABLE: &str = "order";

/// One validated line of a new order, priced at placement time
#[derive(Debug, Clone)]
pub struct NewOrderLine {
    pub menu_item: RecordId,
    pub menu_item_name: String,
    pub quantity: i64,
    pub price: f64,
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create an order together with its lines, all-or-nothing.
    ///
    /// The order row starts with a provisional zero total and is updated to
    /// `total_amount` in the same transaction, after the lines are attached.
    /// Returns the id of the new order.
    pub async fn create_with_items(
        &self,
        user_id: String,
        delivery_address: String,
        lines: &[NewOrderLine],
        total_amount: f64,
    ) -> RepoResult<RecordId> {
        if lines.is_empty() {
            return Err(RepoError::Validation(
                "an order needs at least one line".to_string(),
            ));
        }

        let order_key = snowflake_id();
        let now = now_millis();

        let mut statements = vec![
            "BEGIN TRANSACTION".to_string(),
            "LET $order = (CREATE ONLY type::thing('order', $order_key) SET \
                user_id = $user_id, \
                delivery_address = $delivery_address, \
                status = 'pending', \
                total_amount = 0.0, \
                order_date = $now, \
                created_at = $now, \
                updated_at = $now)"
                .to_string(),
        ];
        for i in 0..lines.len() {
            statements.push(format!(
                "CREATE order_item SET \
                    order_id = $order.id, \
                    menu_item = $menu_item_{i}, \
                    menu_item_name = $menu_item_name_{i}, \
                    quantity = $quantity_{i}, \
                    price = $price_{i}, \
                    created_at = $now"
            ));
        }
        statements.push("UPDATE $order.id SET total_amount = $total_amount, updated_at = $now".to_string());
        statements.push("COMMIT TRANSACTION".to_string());

        let mut query = self
            .base
            .db()
            .query(statements.join(";\n"))
            .bind(("order_key", order_key))
            .bind(("user_id", user_id))
            .bind(("delivery_address", delivery_address))
            .bind(("total_amount", total_amount))
            .bind(("now", now));
        for (i, line) in lines.iter().enumerate() {
            query = query
                .bind((format!("menu_item_{i}"), line.menu_item.clone()))
                .bind((format!("menu_item_name_{i}"), line.menu_item_name.clone()))
                .bind((format!("quantity_{i}"), line.quantity))
                .bind((format!("price_{i}"), line.price));
        }

        query.await?.check()?;

        Ok(RecordId::from_table_key(ORDER_TABLE, order_key))
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let rid = parse_id(ORDER_TABLE, id)?;
        let order: Option<Order> = self.base.db().select(rid).await?;
        Ok(order)
    }

    /// Get the full order aggregate: order, lines, and payments in one query
    pub async fn get_order_detail(&self, order_id: &str) -> RepoResult<OrderDetail> {
        let rid = parse_id(ORDER_TABLE, order_id)?;

        let mut result = self
            .base
            .db()
            .query(
                r#"
                SELECT
                    <string>id AS order_id,
                    user_id,
                    delivery_address,
                    total_amount,
                    status,
                    order_date,
                    (
                        SELECT
                            <string>id AS item_id,
                            <string>menu_item AS menu_item_id,
                            menu_item_name,
                            quantity,
                            price
                        FROM order_item WHERE order_id = $parent.id
                        ORDER BY created_at
                    ) AS items,
                    (
                        SELECT
                            <string>id AS payment_id,
                            method,
                            amount,
                            status,
                            transaction_id,
                            payment_date
                        FROM payment WHERE order_id = $parent.id
                        ORDER BY payment_date
                    ) AS payments
                FROM order WHERE id = $id
                "#,
            )
            .bind(("id", rid))
            .await?;

        let details: Vec<OrderDetail> = result.take(0)?;
        details
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", order_id)))
    }

    /// List a user's orders, most recent first.
    ///
    /// Every call re-queries, so a repeated listing reflects the latest state.
    pub async fn list_by_user(&self, user_id: &str) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order WHERE user_id = $user_id ORDER BY order_date DESC")
            .bind(("user_id", user_id.to_string()))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Update order status (no transition rules at this layer)
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        let rid = parse_id(ORDER_TABLE, id)?;
        let orders: Vec<Order> = self
            .base
            .db()
            .query("UPDATE $thing SET status = $status, updated_at = $now RETURN AFTER")
            .bind(("thing", rid))
            .bind(("status", status))
            .bind(("now", now_millis()))
            .await?
            .take(0)?;
        orders
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Delete an order and everything it owns in one transaction
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let rid = parse_id(ORDER_TABLE, id)?;
        let existing: Option<Order> = self.base.db().select(rid.clone()).await?;
        if existing.is_none() {
            return Err(RepoError::NotFound(format!("Order {} not found", id)));
        }

        self.base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                DELETE order_item WHERE order_id = $id;
                DELETE payment WHERE order_id = $id;
                DELETE $id;
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("id", rid))
            .await?
            .check()?;

        Ok(())
    }
}
