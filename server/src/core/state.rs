//! 服务器状态
//!
//! ServerState 持有所有服务的共享引用，`Clone` 是浅拷贝。

use anyhow::Context;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;

/// 服务器状态 - 持有配置与嵌入式数据库
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 1. 确保工作目录结构存在
    /// 2. 打开数据库 (work_dir/database/tiffin.db)
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        config
            .ensure_work_dir_structure()
            .context("Failed to create work directory structure")?;

        let db_path = config.database_dir().join("tiffin.db");
        let db_service = DbService::new(&db_path)
            .await
            .context("Failed to initialize database")?;

        Ok(Self::new(config.clone(), db_service.db))
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
