//! Order placement integration tests
//!
//! Run: cargo test -p tiffin-server --test order_flow

mod common;

use common::{count_rows, id_str, mem_db, seed_menu_item, seed_restaurant, seed_restaurant_named};
use tiffin_server::AppError;
use tiffin_server::db::models::{OrderItem, OrderStatus};
use tiffin_server::db::repository::{OrderRepository, RestaurantRepository, parse_id};
use tiffin_server::orders::{OrderPlacement, PlaceOrderInput};

fn input(restaurant_id: &str, item_ids: Vec<String>) -> PlaceOrderInput {
    PlaceOrderInput {
        restaurant_id: restaurant_id.to_string(),
        user_id: "user:42".to_string(),
        delivery_address: "7 Lake View, Pune".to_string(),
        item_ids,
    }
}

#[tokio::test]
async fn order_total_matches_sum_of_lines() {
    let db = mem_db().await;
    let restaurant = seed_restaurant(&db).await;
    let rid = id_str(&restaurant.id);
    let dal = seed_menu_item(&db, &restaurant, "Dal Makhani", 10.00, true).await;
    let naan = seed_menu_item(&db, &restaurant, "Garlic Naan", 5.25, true).await;

    let placement = OrderPlacement::new(db.clone());
    let detail = placement
        .place(input(&rid, vec![id_str(&dal.id), id_str(&naan.id)]))
        .await
        .unwrap();

    assert_eq!(detail.total_amount, 15.25);
    assert_eq!(detail.status, OrderStatus::Pending);
    assert_eq!(detail.delivery_address, "7 Lake View, Pune");
    assert_eq!(detail.items.len(), 2);

    // total_amount == sum(price * quantity) exactly
    let line_sum: f64 = detail
        .items
        .iter()
        .map(|i| i.price * i.quantity as f64)
        .sum();
    assert_eq!(detail.total_amount, line_sum);

    // Every line is a single unit with a snapshot price
    for item in &detail.items {
        assert_eq!(item.quantity, 1);
    }

    // Raw rows carry the owning order link
    let order_rid = parse_id("order", &detail.order_id).unwrap();
    let rows: Vec<OrderItem> = db
        .query("SELECT * FROM order_item WHERE order_id = $id")
        .bind(("id", order_rid.clone()))
        .await
        .unwrap()
        .take(0)
        .unwrap();
    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!(row.order_id, order_rid);
        assert_eq!(row.quantity, 1);
    }
}

#[tokio::test]
async fn empty_selection_is_rejected_and_writes_nothing() {
    let db = mem_db().await;
    let restaurant = seed_restaurant(&db).await;
    let rid = id_str(&restaurant.id);

    let placement = OrderPlacement::new(db.clone());
    let err = placement.place(input(&rid, vec![])).await.unwrap_err();

    assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
    assert_eq!(count_rows(&db, "order").await, 0);
    assert_eq!(count_rows(&db, "order_item").await, 0);
}

#[tokio::test]
async fn empty_delivery_address_is_rejected() {
    let db = mem_db().await;
    let restaurant = seed_restaurant(&db).await;
    let rid = id_str(&restaurant.id);
    let dal = seed_menu_item(&db, &restaurant, "Dal Makhani", 10.00, true).await;

    let placement = OrderPlacement::new(db.clone());
    let mut bad = input(&rid, vec![id_str(&dal.id)]);
    bad.delivery_address = "   ".to_string();
    let err = placement.place(bad).await.unwrap_err();

    assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
    assert_eq!(count_rows(&db, "order").await, 0);
}

#[tokio::test]
async fn unavailable_item_rejects_the_whole_order() {
    let db = mem_db().await;
    let restaurant = seed_restaurant(&db).await;
    let rid = id_str(&restaurant.id);
    let available = seed_menu_item(&db, &restaurant, "Masala Dosa", 10.00, true).await;
    let off_menu = seed_menu_item(&db, &restaurant, "Seasonal Thali", 5.00, false).await;

    let placement = OrderPlacement::new(db.clone());

    // Only the available item: succeeds
    let detail = placement
        .place(input(&rid, vec![id_str(&available.id)]))
        .await
        .unwrap();
    assert_eq!(detail.total_amount, 10.00);
    assert_eq!(detail.items.len(), 1);

    // Adding the unavailable one: the whole order is rejected, nothing new persists
    let err = placement
        .place(input(&rid, vec![id_str(&available.id), id_str(&off_menu.id)]))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidSelection(_)), "got {err:?}");

    assert_eq!(count_rows(&db, "order").await, 1);
    assert_eq!(count_rows(&db, "order_item").await, 1);
}

#[tokio::test]
async fn item_from_another_restaurant_is_rejected() {
    let db = mem_db().await;
    let ours = seed_restaurant_named(&db, "Spice Route").await;
    let theirs = seed_restaurant_named(&db, "Noodle Bar").await;
    let foreign_item = seed_menu_item(&db, &theirs, "Hakka Noodles", 8.00, true).await;

    let placement = OrderPlacement::new(db.clone());
    let err = placement
        .place(input(&id_str(&ours.id), vec![id_str(&foreign_item.id)]))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidSelection(_)), "got {err:?}");
    assert_eq!(count_rows(&db, "order").await, 0);
}

#[tokio::test]
async fn unknown_restaurant_is_not_found() {
    let db = mem_db().await;
    let placement = OrderPlacement::new(db.clone());
    let err = placement
        .place(input("restaurant:missing", vec!["menu_item:x".to_string()]))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn soft_deleted_restaurant_cannot_take_orders() {
    let db = mem_db().await;
    let restaurant = seed_restaurant(&db).await;
    let rid = id_str(&restaurant.id);
    let dal = seed_menu_item(&db, &restaurant, "Dal Makhani", 10.00, true).await;

    RestaurantRepository::new(db.clone())
        .soft_delete(&rid)
        .await
        .unwrap();

    let placement = OrderPlacement::new(db.clone());
    let err = placement
        .place(input(&rid, vec![id_str(&dal.id)]))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn duplicate_selection_collapses_to_one_line() {
    let db = mem_db().await;
    let restaurant = seed_restaurant(&db).await;
    let rid = id_str(&restaurant.id);
    let dal = seed_menu_item(&db, &restaurant, "Dal Makhani", 10.00, true).await;

    let placement = OrderPlacement::new(db.clone());
    let detail = placement
        .place(input(&rid, vec![id_str(&dal.id), id_str(&dal.id)]))
        .await
        .unwrap();

    assert_eq!(detail.items.len(), 1);
    assert_eq!(detail.total_amount, 10.00);
}

#[tokio::test]
async fn line_price_is_a_snapshot_of_order_time() {
    let db = mem_db().await;
    let restaurant = seed_restaurant(&db).await;
    let rid = id_str(&restaurant.id);
    let dal = seed_menu_item(&db, &restaurant, "Dal Makhani", 10.00, true).await;

    let placement = OrderPlacement::new(db.clone());
    let first = placement
        .place(input(&rid, vec![id_str(&dal.id)]))
        .await
        .unwrap();

    // Reprice the dish after the first order
    use tiffin_server::db::models::MenuItemUpdate;
    use tiffin_server::db::repository::MenuItemRepository;
    MenuItemRepository::new(db.clone())
        .update(
            &id_str(&dal.id),
            MenuItemUpdate {
                name: None,
                description: None,
                price: Some(12.50),
                availability: None,
                preparation_minutes: None,
            },
        )
        .await
        .unwrap();

    // The placed order keeps the old unit price
    let orders = OrderRepository::new(db.clone());
    let unchanged = orders.get_order_detail(&first.order_id).await.unwrap();
    assert_eq!(unchanged.items[0].price, 10.00);
    assert_eq!(unchanged.total_amount, 10.00);

    // A new order sees the new price
    let second = placement
        .place(input(&rid, vec![id_str(&dal.id)]))
        .await
        .unwrap();
    assert_eq!(second.total_amount, 12.50);
}

#[tokio::test]
async fn reading_an_order_twice_returns_identical_data() {
    let db = mem_db().await;
    let restaurant = seed_restaurant(&db).await;
    let rid = id_str(&restaurant.id);
    let dal = seed_menu_item(&db, &restaurant, "Dal Makhani", 10.00, true).await;

    let placement = OrderPlacement::new(db.clone());
    let placed = placement
        .place(input(&rid, vec![id_str(&dal.id)]))
        .await
        .unwrap();

    let orders = OrderRepository::new(db.clone());
    let first = orders.get_order_detail(&placed.order_id).await.unwrap();
    let second = orders.get_order_detail(&placed.order_id).await.unwrap();

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[tokio::test]
async fn history_lists_most_recent_orders_first() {
    let db = mem_db().await;
    let restaurant = seed_restaurant(&db).await;
    let rid = id_str(&restaurant.id);
    let dal = seed_menu_item(&db, &restaurant, "Dal Makhani", 10.00, true).await;

    let placement = OrderPlacement::new(db.clone());
    for _ in 0..3 {
        placement
            .place(input(&rid, vec![id_str(&dal.id)]))
            .await
            .unwrap();
        // order_date is unix millis; space the orders out
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let orders = OrderRepository::new(db.clone());
    let history = orders.list_by_user("user:42").await.unwrap();
    assert_eq!(history.len(), 3);
    for pair in history.windows(2) {
        assert!(
            pair[0].order_date >= pair[1].order_date,
            "history must be non-increasing by order_date"
        );
    }

    // Restartable: a later query reflects the latest state
    placement
        .place(input(&rid, vec![id_str(&dal.id)]))
        .await
        .unwrap();
    let refreshed = orders.list_by_user("user:42").await.unwrap();
    assert_eq!(refreshed.len(), 4);

    // Other users see nothing
    let other = orders.list_by_user("user:43").await.unwrap();
    assert!(other.is_empty());
}

#[tokio::test]
async fn quantity_policy_drives_line_quantities() {
    use tiffin_server::db::models::MenuItem;
    use tiffin_server::orders::QuantityPolicy;

    struct TwoOfEverything;
    impl QuantityPolicy for TwoOfEverything {
        fn quantity_for(&self, _menu_item: &MenuItem) -> i64 {
            2
        }
    }

    struct Broken;
    impl QuantityPolicy for Broken {
        fn quantity_for(&self, _menu_item: &MenuItem) -> i64 {
            0
        }
    }

    let db = mem_db().await;
    let restaurant = seed_restaurant(&db).await;
    let rid = id_str(&restaurant.id);
    let dal = seed_menu_item(&db, &restaurant, "Dal Makhani", 10.00, true).await;

    let placement = OrderPlacement::new(db.clone());
    let detail = placement
        .place_with_policy(input(&rid, vec![id_str(&dal.id)]), &TwoOfEverything)
        .await
        .unwrap();
    assert_eq!(detail.items[0].quantity, 2);
    assert_eq!(detail.total_amount, 20.00);

    // A policy that yields less than one unit is invalid and writes nothing
    let err = placement
        .place_with_policy(input(&rid, vec![id_str(&dal.id)]), &Broken)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
    assert_eq!(count_rows(&db, "order").await, 1);
}
