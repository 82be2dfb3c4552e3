//! Tiffin Server - 外卖订餐服务端
//!
//! # 架构概述
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储，每个实体一个 repository
//! - **订单核心** (`orders`): 下单聚合构建、支付记录、Decimal 金额计算
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models + repositories)
//! ├── orders/        # 下单与支付业务核心
//! └── utils/         # 错误、日志、校验、时间工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use crate::db::DbService;
pub use crate::orders::{OrderPlacement, PaymentRecorder};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
  ______ _  ____  _____
 /_  __/(_)/ __/ / __/(_)____
  / /  / // /_  / /_ / // __ \
 / /  / // __/ / __// // / / /
/_/  /_//_/   /_/  /_//_/ /_/
    "#
    );
}
