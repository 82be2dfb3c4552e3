//! Payment API Module
//!
//! Routes live under the order path but are registered with full paths:
//! the order router already nests `/api/orders`, and two nests on the same
//! prefix would collide.

mod handler;

use axum::{
    Router,
    routing::get,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/orders/{id}/payments",
        get(handler::list).post(handler::record),
    )
}
