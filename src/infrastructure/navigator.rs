//! 界面副作用 - 基础设施层
//!
//! 页面跳转和提示由宿主界面实现，这里只定义能力。

use tracing::{info, warn};

/// 页面跳转与提示
pub trait Navigator: Send + Sync {
    /// 跳转到指定路由
    fn redirect_to(&self, route: &str);

    /// 显示短暂提示
    fn show_notice(&self, text: &str);
}

/// 只写日志的默认实现（命令行环境下使用）
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn redirect_to(&self, route: &str) {
        info!("➡️ 跳转页面: {}", route);
    }

    fn show_notice(&self, text: &str) {
        warn!("💬 {}", text);
    }
}
