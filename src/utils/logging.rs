/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use crate::config::ClientConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化全局日志
///
/// `RUST_LOG` 优先；否则按 `verbose` 选择 `debug` 或 `info`。
/// 重复调用不会报错。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 已加载的配置
pub fn log_startup(config: &ClientConfig) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 客户端启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🌐 后端地址: {}{}", config.base_origin, config.path_prefix);
    match &config.token_storage_path {
        Some(path) => info!("🔑 凭证存储: {}", path),
        None => info!("🔑 凭证存储: 内存"),
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_text("题干内容很长", 2), "题干...");
        assert_eq!(truncate_text("short", 10), "short");
    }

    #[test]
    fn init_twice_is_harmless() {
        init(false);
        init(true);
    }
}
