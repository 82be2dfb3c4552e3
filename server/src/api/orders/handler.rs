//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Order, OrderDetail, OrderStatus};
use crate::db::repository::OrderRepository;
use crate::orders::{OrderPlacement, PlaceOrderInput};
use crate::utils::{AppError, AppResponse, AppResult};

/// Place-order request body
#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    pub user_id: String,
    pub restaurant_id: String,
    pub delivery_address: String,
    pub item_ids: Vec<String>,
}

/// POST /api/orders - 下单
pub async fn place(
    State(state): State<ServerState>,
    Json(payload): Json<PlaceOrderRequest>,
) -> AppResult<Json<OrderDetail>> {
    let placement = OrderPlacement::new(state.db.clone());
    let detail = placement
        .place(PlaceOrderInput {
            restaurant_id: payload.restaurant_id,
            user_id: payload.user_id,
            delivery_address: payload.delivery_address,
            item_ids: payload.item_ids,
        })
        .await?;
    Ok(Json(detail))
}

/// GET /api/orders/{id} - 订单详情 (含明细与支付)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderDetail>> {
    let repo = OrderRepository::new(state.db.clone());
    let detail = repo.get_order_detail(&id).await.map_err(AppError::from)?;
    Ok(Json(detail))
}

/// Query params for order history
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub user_id: String,
}

/// GET /api/orders/history?user_id= - 用户订单历史，按下单时间倒序
pub async fn history(
    State(state): State<ServerState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo
        .list_by_user(&query.user_id)
        .await
        .map_err(AppError::from)?;
    Ok(Json(orders))
}

/// Status update request
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// PUT /api/orders/{id}/status - 更新订单状态
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .update_status(&id, payload.status)
        .await
        .map_err(AppError::from)?;
    Ok(Json(order))
}

/// DELETE /api/orders/{id} - 删除订单 (级联删除明细与支付)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let repo = OrderRepository::new(state.db.clone());
    repo.delete(&id).await.map_err(AppError::from)?;
    Ok(Json(AppResponse::success(())))
}
