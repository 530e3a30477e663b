//! API 模块
//!
//! 按业务分组的后端接口，全部经由 [`Gateway`] 发出请求。

pub mod admin;
pub mod auth;
pub mod error_book;
pub mod health;
pub mod knowledge;
pub mod practice;
pub mod questions;
pub mod users;

use crate::config::ClientConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::gateway::{ClientContext, Gateway, RequestOptions};
use serde::de::IgnoredAny;
use serde::Serialize;
use serde_json::Value;

/// 后端接口客户端
#[derive(Clone)]
pub struct ApiClient {
    gateway: Gateway,
}

impl ApiClient {
    pub fn new(context: ClientContext) -> Self {
        Self {
            gateway: Gateway::new(context),
        }
    }

    /// 按配置创建客户端
    pub fn from_config(config: &ClientConfig) -> GatewayResult<Self> {
        Ok(Self::new(ClientContext::from_config(config)?))
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// 发送请求并丢弃响应体
    async fn send_unit(&self, path: &str, options: RequestOptions) -> GatewayResult<()> {
        self.gateway
            .send::<IgnoredAny>(path, options)
            .await
            .map(|_| ())
    }
}

/// 把请求数据序列化为 JSON
fn payload<T: Serialize>(path: &str, value: &T) -> GatewayResult<Value> {
    serde_json::to_value(value).map_err(|source| GatewayError::Encode {
        path: path.to_string(),
        source,
    })
}
