//! 请求描述与响应结果

use crate::error::{GatewayError, TransportError};
use crate::infrastructure::{Headers, HttpMethod};
use serde_json::Value;

/// 调用方传入的请求选项
///
/// `method` 保留原始字符串，由网关统一规范化。
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Option<String>,
    pub headers: Headers,
    pub data: Option<Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get() -> Self {
        Self::new().method("GET")
    }

    pub fn post(data: Value) -> Self {
        Self::new().method("POST").data(data)
    }

    pub fn put(data: Value) -> Self {
        Self::new().method("PUT").data(data)
    }

    pub fn delete() -> Self {
        Self::new().method("DELETE")
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// 单次请求的完整描述
///
/// 由网关为每次调用单独构建，调用结束即丢弃。
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// 调用方传入的原始路径
    pub path: String,
    /// 规范化后的完整地址（GET 类请求已含查询串）
    pub url: String,
    pub method: HttpMethod,
    pub headers: Headers,
    pub body: Option<Value>,
}

/// 失败分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Unauthorized,
    Application,
    Transport,
}

/// 单次请求的结果，每个描述只产生一个
#[derive(Debug)]
pub enum ResponseOutcome {
    /// 2xx
    Success { status: u16, body: Value },
    /// 401（已触发会话失效处理）
    Unauthorized { body: Value },
    /// 其他非 2xx
    ApplicationError { status: u16, body: Value },
    /// 没有拿到响应
    TransportFailure(TransportError),
}

impl ResponseOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseOutcome::Success { .. })
    }

    /// 失败分类，成功时为 None
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            ResponseOutcome::Success { .. } => None,
            ResponseOutcome::Unauthorized { .. } => Some(FailureKind::Unauthorized),
            ResponseOutcome::ApplicationError { .. } => Some(FailureKind::Application),
            ResponseOutcome::TransportFailure(_) => Some(FailureKind::Transport),
        }
    }

    /// 原始状态码
    pub fn status(&self) -> Option<u16> {
        match self {
            ResponseOutcome::Success { status, .. }
            | ResponseOutcome::ApplicationError { status, .. } => Some(*status),
            ResponseOutcome::Unauthorized { .. } => Some(401),
            ResponseOutcome::TransportFailure(_) => None,
        }
    }

    /// 转换为结果类型，失败时保留状态码和响应体
    pub fn into_result(self, url: &str) -> Result<Value, GatewayError> {
        match self {
            ResponseOutcome::Success { body, .. } => Ok(body),
            ResponseOutcome::Unauthorized { body } => Err(GatewayError::Unauthorized {
                url: url.to_string(),
                body,
            }),
            ResponseOutcome::ApplicationError { status, body } => Err(GatewayError::Application {
                status,
                url: url.to_string(),
                body,
            }),
            ResponseOutcome::TransportFailure(source) => Err(GatewayError::Transport {
                url: url.to_string(),
                source,
            }),
        }
    }
}
