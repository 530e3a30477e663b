use anyhow::{Context, Result};
use quiz_api_client::utils::logging;
use quiz_api_client::{ApiClient, ClientConfig};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = ClientConfig::from_env().context("读取环境配置失败")?;

    // 初始化日志
    logging::init(config.verbose_logging);
    logging::log_startup(&config);

    let client = ApiClient::from_config(&config).context("创建客户端失败")?;

    match client.health().await {
        Ok(status) => {
            info!("✅ 后端状态: {}", status.status);
            match status.db.as_deref() {
                Some("ok") | None => {}
                Some(db) => warn!("⚠️ 数据库异常: {}", db),
            }
            Ok(())
        }
        Err(e) => {
            error!("❌ 健康检查失败: {}", e);
            Err(e).context("健康检查失败")
        }
    }
}
