//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举
//! - [`AppResponse`] - API 响应结构
//!
//! # 错误码规范
//!
//! | 代码 | 分类 | 说明 |
//! |------|------|------|
//! | E0002 | 验证错误 | 输入校验失败 |
//! | E0003 | 资源不存在 | Restaurant/MenuItem/Order 未找到 |
//! | E0004 | 冲突 | transaction_id 重复 |
//! | E0005 | 业务规则 | 菜品不可点 (下架或不属于该餐厅) |
//! | E0006 | 业务规则 | 支付金额与订单总额不一致 |
//! | E9xxx | 系统错误 | 数据库错误、内部错误 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// API 统一响应结构
///
/// ```json
/// {
///   "code": "0000",
///   "message": "success",
///   "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    /// 错误码 (0000 表示成功)
    pub code: String,
    /// 消息
    pub message: String,
    /// 响应数据
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> AppResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            code: "0000".to_string(),
            message: "success".to_string(),
            data: Some(data),
        }
    }
}

/// 应用错误枚举
///
/// Business failures are recovered at the HTTP boundary: every variant maps
/// to a status code and stable error code. Nothing here aborts the process.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 业务逻辑错误 (4xx) ==========
    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("Invalid selection: {0}")]
    /// 菜品不可点 — 下架或不属于目标餐厅 (422)
    InvalidSelection(String),

    #[error("Amount mismatch: {0}")]
    /// 支付金额与订单总额不一致 (422)
    AmountMismatch(String),

    #[error("Resource already exists: {0}")]
    /// 资源冲突 (409)
    Conflict(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_selection(msg: impl Into<String>) -> Self {
        Self::InvalidSelection(msg.into())
    }

    pub fn amount_mismatch(msg: impl Into<String>) -> Self {
        Self::AmountMismatch(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Not found (404)
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.clone()),

            // Validation (400)
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.clone()),

            // Business rules (422)
            AppError::InvalidSelection(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E0005", msg.clone())
            }
            AppError::AmountMismatch(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E0006", msg.clone())
            }

            // Conflict (409)
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "E0004", msg.clone()),

            // Database errors (500) — 记录内部错误但不暴露详细信息
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9002",
                    "Database error".to_string(),
                )
            }

            // Internal errors (500)
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody { code, message };
        (status, Json(body)).into_response()
    }
}

/// 处理器的 Result 类型别名
pub type AppResult<T> = std::result::Result<T, AppError>;
