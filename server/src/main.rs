use anyhow::Context;
use tiffin_server::{Config, Server, ServerState, init_logger, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    config
        .ensure_work_dir_structure()
        .context("Failed to create work directory structure")?;

    // 生产环境写滚动日志文件，开发环境输出到 stderr
    let logs_dir = config.logs_dir();
    if config.environment == "production" {
        init_logger_with_file(None, logs_dir.to_str());
    } else {
        init_logger();
    }

    // 打印横幅
    print_banner();

    tracing::info!(environment = %config.environment, "Tiffin server starting...");

    // 2. 初始化服务器状态
    let state = ServerState::initialize(&config).await?;

    // 3. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
