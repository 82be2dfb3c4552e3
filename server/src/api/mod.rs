//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`restaurants`] - 餐厅管理接口
//! - [`menu_items`] - 菜品管理接口
//! - [`orders`] - 订单接口 (下单、查询、状态)
//! - [`payments`] - 支付记录接口

pub mod health;
pub mod menu_items;
pub mod orders;
pub mod payments;
pub mod restaurants;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
