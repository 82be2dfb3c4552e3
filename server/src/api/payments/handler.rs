//! Payment API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Payment, PaymentMethod};
use crate::db::repository::PaymentRepository;
use crate::orders::{PaymentRecorder, RecordPaymentInput};
use crate::utils::{AppError, AppResult};

/// Record-payment request body
#[derive(Debug, Deserialize)]
pub struct RecordPaymentRequest {
    pub method: PaymentMethod,
    pub amount: f64,
    pub transaction_id: Option<String>,
}

/// POST /api/orders/{id}/payments - 记录支付
pub async fn record(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RecordPaymentRequest>,
) -> AppResult<Json<Payment>> {
    let recorder = PaymentRecorder::new(state.db.clone());
    let payment = recorder
        .record(
            &id,
            RecordPaymentInput {
                method: payload.method,
                amount: payload.amount,
                transaction_id: payload.transaction_id,
            },
        )
        .await?;
    Ok(Json(payment))
}

/// GET /api/orders/{id}/payments - 订单支付记录
pub async fn list(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Payment>>> {
    let repo = PaymentRepository::new(state.db.clone());
    let payments = repo.list_by_order(&id).await.map_err(AppError::from)?;
    Ok(Json(payments))
}
