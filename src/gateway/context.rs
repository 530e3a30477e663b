//! 客户端上下文
//!
//! 显式构造的依赖集合（地址配置 + 存储 + 传输 + 界面副作用），
//! 替代进程级全局变量，测试时可以整体替换为假实现。

use crate::config::{ClientConfig, EndpointConfig};
use crate::error::GatewayResult;
use crate::gateway::observer::{RequestObserver, TracingObserver};
use crate::infrastructure::{
    FileStore, KeyValueStore, LogNavigator, MemoryStore, Navigator, ReqwestTransport, Transport,
};
use std::sync::Arc;
use std::time::Duration;

/// 401 处理策略
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPolicy {
    /// 为 false 时 401 按普通错误处理
    pub enabled: bool,
    pub login_route: String,
    pub redirect_delay: Duration,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            login_route: "/pages/login/login".to_string(),
            redirect_delay: Duration::from_millis(1500),
        }
    }
}

/// 客户端上下文
#[derive(Clone)]
pub struct ClientContext {
    pub endpoint: EndpointConfig,
    pub transport: Arc<dyn Transport>,
    pub store: Arc<dyn KeyValueStore>,
    pub navigator: Arc<dyn Navigator>,
    pub observer: Arc<dyn RequestObserver>,
    pub token_key: String,
    pub session: SessionPolicy,
}

impl ClientContext {
    /// 用默认的界面副作用和观测者创建上下文
    pub fn new(
        endpoint: EndpointConfig,
        transport: Arc<dyn Transport>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            endpoint,
            transport,
            store,
            navigator: Arc::new(LogNavigator),
            observer: Arc::new(TracingObserver),
            token_key: "token".to_string(),
            session: SessionPolicy::default(),
        }
    }

    /// 按配置装配生产环境的上下文
    ///
    /// 配置了 `token_storage_path` 时使用文件存储，否则使用内存存储。
    pub fn from_config(config: &ClientConfig) -> GatewayResult<Self> {
        let endpoint = config.endpoint()?;
        let transport = ReqwestTransport::new(Duration::from_secs(config.request_timeout_secs))?;

        let store: Arc<dyn KeyValueStore> = match &config.token_storage_path {
            Some(path) => Arc::new(FileStore::open(path)?),
            None => Arc::new(MemoryStore::new()),
        };

        Ok(Self::new(endpoint, Arc::new(transport), store)
            .with_token_key(config.token_key.clone())
            .with_session_policy(SessionPolicy {
                enabled: config.invalidate_on_unauthorized,
                login_route: config.login_route.clone(),
                redirect_delay: Duration::from_millis(config.redirect_delay_ms),
            }))
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_token_key(mut self, token_key: impl Into<String>) -> Self {
        self.token_key = token_key.into();
        self
    }

    pub fn with_session_policy(mut self, session: SessionPolicy) -> Self {
        self.session = session;
        self
    }
}
