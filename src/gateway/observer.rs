//! 请求观测钩子
//!
//! 发送前、收到响应后各调用一次，只用于记录，不影响请求结果。

use crate::error::TransportError;
use crate::infrastructure::HttpMethod;
use crate::utils::truncate_text;
use serde_json::Value;
use tracing::{debug, info, warn};

/// 日志中请求/响应体的最大显示长度
const MAX_LOGGED_BODY_CHARS: usize = 500;

/// 请求观测者
pub trait RequestObserver: Send + Sync {
    /// 发送前
    fn on_request(&self, method: HttpMethod, url: &str, payload: Option<&Value>);

    /// 收到响应后（任意状态码）
    fn on_response(&self, method: HttpMethod, url: &str, status: u16, body: &Value);

    /// 传输层失败，没有响应
    fn on_transport_error(&self, method: HttpMethod, url: &str, error: &TransportError);
}

/// 输出结构化 tracing 事件的观测者
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, method: HttpMethod, url: &str, payload: Option<&Value>) {
        info!(%method, %url, "[API] 发送请求");
        if let Some(payload) = payload {
            debug!(
                payload = %truncate_text(&payload.to_string(), MAX_LOGGED_BODY_CHARS),
                "[API] 请求数据"
            );
        }
    }

    fn on_response(&self, method: HttpMethod, url: &str, status: u16, body: &Value) {
        let body = truncate_text(&body.to_string(), MAX_LOGGED_BODY_CHARS);
        if (200..300).contains(&status) {
            info!(%method, %url, status, "[API] 响应");
            debug!(%body, "[API] 响应数据");
        } else {
            warn!(%method, %url, status, %body, "[API] 错误响应");
        }
    }

    fn on_transport_error(&self, method: HttpMethod, url: &str, error: &TransportError) {
        warn!(%method, %url, %error, "[API] 请求失败");
    }
}
