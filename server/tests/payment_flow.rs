//! Payment recording and order lifecycle integration tests
//!
//! Run: cargo test -p tiffin-server --test payment_flow

mod common;

use common::{count_rows, id_str, mem_db, seed_menu_item, seed_restaurant};
use tiffin_server::AppError;
use tiffin_server::db::models::{OrderDetail, OrderStatus, PaymentMethod};
use tiffin_server::db::repository::{OrderRepository, PaymentRepository};
use tiffin_server::orders::{
    OrderPlacement, PaymentRecorder, PlaceOrderInput, RecordPaymentInput,
};

async fn place_ten_unit_order(db: &surrealdb::Surreal<surrealdb::engine::local::Db>) -> OrderDetail {
    let restaurant = seed_restaurant(db).await;
    let dal = seed_menu_item(db, &restaurant, "Dal Makhani", 10.00, true).await;
    OrderPlacement::new(db.clone())
        .place(PlaceOrderInput {
            restaurant_id: id_str(&restaurant.id),
            user_id: "user:42".to_string(),
            delivery_address: "7 Lake View, Pune".to_string(),
            item_ids: vec![id_str(&dal.id)],
        })
        .await
        .unwrap()
}

fn upi(amount: f64) -> RecordPaymentInput {
    RecordPaymentInput {
        method: PaymentMethod::Upi,
        amount,
        transaction_id: None,
    }
}

#[tokio::test]
async fn payment_matching_the_total_succeeds() {
    let db = mem_db().await;
    let order = place_ten_unit_order(&db).await;

    let recorder = PaymentRecorder::new(db.clone());
    let payment = recorder.record(&order.order_id, upi(10.00)).await.unwrap();

    assert_eq!(payment.amount, 10.00);
    assert_eq!(payment.status, "pending");
    assert_eq!(payment.method, PaymentMethod::Upi);

    // The payment shows up in the order aggregate
    let detail = OrderRepository::new(db.clone())
        .get_order_detail(&order.order_id)
        .await
        .unwrap();
    assert_eq!(detail.payments.len(), 1);
    assert_eq!(detail.payments[0].amount, 10.00);
}

#[tokio::test]
async fn payment_off_by_a_cent_is_rejected() {
    let db = mem_db().await;
    let order = place_ten_unit_order(&db).await;

    let recorder = PaymentRecorder::new(db.clone());
    let err = recorder.record(&order.order_id, upi(9.99)).await.unwrap_err();

    assert!(matches!(err, AppError::AmountMismatch(_)), "got {err:?}");
    assert_eq!(count_rows(&db, "payment").await, 0);
}

#[tokio::test]
async fn negative_or_non_finite_amounts_are_rejected() {
    let db = mem_db().await;
    let order = place_ten_unit_order(&db).await;

    let recorder = PaymentRecorder::new(db.clone());
    for bad in [-10.00, f64::NAN, f64::INFINITY] {
        let err = recorder.record(&order.order_id, upi(bad)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "amount {bad} got {err:?}");
    }
    assert_eq!(count_rows(&db, "payment").await, 0);
}

#[tokio::test]
async fn payment_against_unknown_order_is_not_found() {
    let db = mem_db().await;
    let recorder = PaymentRecorder::new(db.clone());
    let err = recorder.record("order:999999", upi(10.00)).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn duplicate_transaction_id_is_rejected() {
    let db = mem_db().await;
    let order = place_ten_unit_order(&db).await;

    let recorder = PaymentRecorder::new(db.clone());
    let mut first = upi(10.00);
    first.transaction_id = Some("TXN-0001".to_string());
    recorder.record(&order.order_id, first).await.unwrap();

    let mut second = upi(10.00);
    second.transaction_id = Some("TXN-0001".to_string());
    let err = recorder.record(&order.order_id, second).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)), "got {err:?}");
    assert_eq!(count_rows(&db, "payment").await, 1);
}

#[tokio::test]
async fn recording_a_payment_does_not_advance_order_status() {
    let db = mem_db().await;
    let order = place_ten_unit_order(&db).await;

    PaymentRecorder::new(db.clone())
        .record(&order.order_id, upi(10.00))
        .await
        .unwrap();

    let after = OrderRepository::new(db.clone())
        .find_by_id(&order.order_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after.status, OrderStatus::Pending);
}

#[tokio::test]
async fn status_updates_round_trip_every_value() {
    let db = mem_db().await;
    let order = place_ten_unit_order(&db).await;
    let orders = OrderRepository::new(db.clone());

    for status in [
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::Pending,
    ] {
        let updated = orders.update_status(&order.order_id, status).await.unwrap();
        assert_eq!(updated.status, status);
        let read_back = orders.find_by_id(&order.order_id).await.unwrap().unwrap();
        assert_eq!(read_back.status, status);
    }
}

#[tokio::test]
async fn deleting_an_order_cascades_to_items_and_payments() {
    let db = mem_db().await;
    let order = place_ten_unit_order(&db).await;

    PaymentRecorder::new(db.clone())
        .record(&order.order_id, upi(10.00))
        .await
        .unwrap();
    assert_eq!(count_rows(&db, "order_item").await, 1);
    assert_eq!(count_rows(&db, "payment").await, 1);

    let orders = OrderRepository::new(db.clone());
    orders.delete(&order.order_id).await.unwrap();

    let err = orders.get_order_detail(&order.order_id).await.unwrap_err();
    assert!(matches!(
        err,
        tiffin_server::db::repository::RepoError::NotFound(_)
    ));
    assert_eq!(count_rows(&db, "order").await, 0);
    assert_eq!(count_rows(&db, "order_item").await, 0);
    assert_eq!(count_rows(&db, "payment").await, 0);

    let remaining = PaymentRepository::new(db.clone())
        .list_by_order(&order.order_id)
        .await
        .unwrap();
    assert!(remaining.is_empty());
}
