//! 会话失效处理
//!
//! 收到 401 时清除凭证、提示用户，并延迟跳转到登录页。

use crate::error::SESSION_EXPIRED_NOTICE;
use crate::infrastructure::{KeyValueStore, Navigator};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// 会话失效处理器
///
/// 克隆后共享同一个"跳转已排队"标记，并发的多个 401 只会产生一次跳转。
/// 标记在跳转执行后复位，重新登录后再次失效仍会跳转。
#[derive(Clone)]
pub struct SessionInvalidator {
    store: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
    token_key: String,
    login_route: String,
    redirect_delay: Duration,
    redirect_pending: Arc<AtomicBool>,
}

impl SessionInvalidator {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
        token_key: impl Into<String>,
        login_route: impl Into<String>,
        redirect_delay: Duration,
    ) -> Self {
        Self {
            store,
            navigator,
            token_key: token_key.into(),
            login_route: login_route.into(),
            redirect_delay,
            redirect_pending: Arc::new(AtomicBool::new(false)),
        }
    }

    /// 是否已有跳转在等待执行
    pub fn is_redirect_pending(&self) -> bool {
        self.redirect_pending.load(Ordering::SeqCst)
    }

    /// 处理一次授权失败
    ///
    /// 不阻塞调用方：跳转在后台任务中延迟执行。没有 tokio 运行时时立即跳转。
    pub fn on_unauthorized(&self) {
        // 清除已清除的凭证是空操作
        if let Err(e) = self.store.remove(&self.token_key) {
            warn!("清除登录凭证失败: {}", e);
        }

        if self.redirect_pending.swap(true, Ordering::SeqCst) {
            debug!("登录跳转已在排队，忽略重复的 401");
            return;
        }

        info!("🔒 登录已失效，{} 毫秒后跳转 {}", self.redirect_delay.as_millis(), self.login_route);
        self.navigator.show_notice(SESSION_EXPIRED_NOTICE);

        let navigator = Arc::clone(&self.navigator);
        let pending = Arc::clone(&self.redirect_pending);
        let route = self.login_route.clone();
        let delay = self.redirect_delay;

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    navigator.redirect_to(&route);
                    pending.store(false, Ordering::SeqCst);
                });
            }
            Err(_) => {
                navigator.redirect_to(&route);
                pending.store(false, Ordering::SeqCst);
            }
        }
    }
}
