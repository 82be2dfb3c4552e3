//! Restaurant API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{MenuItem, Restaurant, RestaurantCreate, RestaurantUpdate};
use crate::db::repository::{MenuItemRepository, RestaurantRepository};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN,
    validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResponse, AppResult};

/// GET /api/restaurants - 获取所有餐厅 (不含已删除)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Restaurant>>> {
    let repo = RestaurantRepository::new(state.db.clone());
    let restaurants = repo.find_all().await.map_err(AppError::from)?;
    Ok(Json(restaurants))
}

/// GET /api/restaurants/{id} - 获取单个餐厅
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Restaurant>> {
    let repo = RestaurantRepository::new(state.db.clone());
    let restaurant = repo
        .find_by_id(&id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("Restaurant {} not found", id)))?;
    Ok(Json(restaurant))
}

/// POST /api/restaurants - 创建餐厅
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RestaurantCreate>,
) -> AppResult<Json<Restaurant>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.owner_id, "owner_id", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_required_text(&payload.phone_number, "phone_number", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let repo = RestaurantRepository::new(state.db.clone());
    let restaurant = repo.create(payload).await.map_err(AppError::from)?;
    Ok(Json(restaurant))
}

/// PUT /api/restaurants/{id} - 更新餐厅
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RestaurantUpdate>,
) -> AppResult<Json<Restaurant>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.phone_number, "phone_number", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let repo = RestaurantRepository::new(state.db.clone());
    let restaurant = repo.update(&id, payload).await.map_err(AppError::from)?;
    Ok(Json(restaurant))
}

/// DELETE /api/restaurants/{id} - 软删除餐厅
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    let repo = RestaurantRepository::new(state.db.clone());
    repo.soft_delete(&id).await.map_err(AppError::from)?;
    Ok(Json(AppResponse::success(())))
}

/// Query params for the menu listing
#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    #[serde(default)]
    pub available_only: bool,
}

/// GET /api/restaurants/{id}/menu - 餐厅菜单
pub async fn list_menu(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<Vec<MenuItem>>> {
    // 404 for unknown or soft-deleted restaurants, not an empty menu
    let restaurants = RestaurantRepository::new(state.db.clone());
    restaurants
        .find_by_id(&id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::not_found(format!("Restaurant {} not found", id)))?;

    let repo = MenuItemRepository::new(state.db.clone());
    let items = repo
        .find_by_restaurant(&id, query.available_only)
        .await
        .map_err(AppError::from)?;
    Ok(Json(items))
}
