//! Menu Item API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use crate::db::repository::{MenuItemRepository, RestaurantRepository};
use crate::orders::money;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// POST /api/menu-items - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    money::validate_amount(payload.price, "price")?;

    // The owning restaurant must exist and be live
    let restaurants = RestaurantRepository::new(state.db.clone());
    restaurants
        .find_by_id(&payload.restaurant.to_string())
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| {
            AppError::not_found(format!("Restaurant {} not found", payload.restaurant))
        })?;

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.create(payload).await.map_err(AppError::from)?;
    Ok(Json(item))
}

/// GET /api/menu-items/{id} - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo
        .find_by_id(&id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("Menu item {} not found", id)))?;
    Ok(Json(item))
}

/// PUT /api/menu-items/{id} - 更新菜品
///
/// 改价不影响已下单的快照价格。
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    if let Some(price) = payload.price {
        money::validate_amount(price, "price")?;
    }

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.update(&id, payload).await.map_err(AppError::from)?;
    Ok(Json(item))
}
