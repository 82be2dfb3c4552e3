//! Order API Module
//!
//! Placement goes through the aggregate builder; reads hit the repository
//! directly.

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::place))
        // Order history (must be before /{id} to avoid path conflicts)
        .route("/history", get(handler::history))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
        .route("/{id}/status", put(handler::update_status))
}
