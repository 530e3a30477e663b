//! 请求网关
//!
//! 一次调用的完整流程：拼地址 → 规范化方法 → 注入鉴权头 → 发送 → 分类响应。
//! 网关不重试，重试策略由调用方决定。

use crate::config::EndpointConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::gateway::auth::AuthInjector;
use crate::gateway::context::ClientContext;
use crate::gateway::method::normalize_method;
use crate::gateway::observer::RequestObserver;
use crate::gateway::request::{RequestDescriptor, RequestOptions, ResponseOutcome};
use crate::gateway::session::SessionInvalidator;
use crate::gateway::url::{append_query, resolve_url};
use crate::infrastructure::{KeyValueStore, Transport, TransportRequest};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// 请求网关
///
/// 克隆开销很小，克隆体共享存储、传输层和会话失效状态。
/// 多个请求可以同时进行，彼此之间只共享只读的凭证。
#[derive(Clone)]
pub struct Gateway {
    pub(super) endpoint: EndpointConfig,
    pub(super) transport: Arc<dyn Transport>,
    pub(super) observer: Arc<dyn RequestObserver>,
    pub(super) store: Arc<dyn KeyValueStore>,
    pub(super) token_key: String,
    pub(super) auth: AuthInjector,
    pub(super) invalidator: Option<SessionInvalidator>,
}

impl Gateway {
    /// 由上下文创建网关
    pub fn new(context: ClientContext) -> Self {
        let auth = AuthInjector::new(Arc::clone(&context.store), context.token_key.clone());
        let invalidator = context.session.enabled.then(|| {
            SessionInvalidator::new(
                Arc::clone(&context.store),
                Arc::clone(&context.navigator),
                context.token_key.clone(),
                context.session.login_route.clone(),
                context.session.redirect_delay,
            )
        });

        Self {
            endpoint: context.endpoint,
            transport: context.transport,
            observer: context.observer,
            store: context.store,
            token_key: context.token_key,
            auth,
            invalidator,
        }
    }

    pub fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    /// 会话失效处理器（关闭 401 处理时为 None）
    pub fn session(&self) -> Option<&SessionInvalidator> {
        self.invalidator.as_ref()
    }

    /// 拼接完整地址
    pub fn resolve(&self, path: &str) -> String {
        resolve_url(
            self.endpoint.base_origin(),
            self.endpoint.path_prefix(),
            path,
        )
    }

    /// 当前凭证
    pub fn current_token(&self) -> GatewayResult<Option<String>> {
        Ok(self.auth.token()?)
    }

    /// 保存凭证（登录流程使用）
    pub fn store_token(&self, token: &str) -> GatewayResult<()> {
        self.store.set(&self.token_key, token)?;
        Ok(())
    }

    /// 清除凭证（主动登出使用）
    pub fn clear_token(&self) -> GatewayResult<()> {
        self.store.remove(&self.token_key)?;
        Ok(())
    }

    /// 构建请求描述
    ///
    /// POST/PUT 的数据作为 JSON 请求体（未提供时为 `{}`），
    /// 其余方法的数据编码进查询串。
    pub fn build_descriptor(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> GatewayResult<RequestDescriptor> {
        let method = normalize_method(options.method.as_deref());
        let mut url = self.resolve(path);
        let headers = self.auth.headers(&options.headers)?;

        let body = if method.carries_body() {
            Some(options.data.unwrap_or_else(|| json!({})))
        } else {
            if let Some(data) = &options.data {
                url = append_query(&url, data)?;
            }
            None
        };

        Ok(RequestDescriptor {
            path: path.to_string(),
            url,
            method,
            headers,
            body,
        })
    }

    /// 发送请求并返回分类后的结果
    pub async fn execute(&self, descriptor: RequestDescriptor) -> ResponseOutcome {
        let RequestDescriptor {
            url,
            method,
            headers,
            body,
            ..
        } = descriptor;

        self.observer.on_request(method, &url, body.as_ref());

        let request = TransportRequest {
            url: url.clone(),
            method,
            headers,
            body,
        };

        match self.transport.execute(request).await {
            Ok(raw) => {
                self.observer
                    .on_response(method, &url, raw.status, &raw.body);
                self.classify(raw.status, raw.body)
            }
            Err(e) => {
                self.observer.on_transport_error(method, &url, &e);
                ResponseOutcome::TransportFailure(e)
            }
        }
    }

    /// 发送请求并把成功的响应体解码为 `T`
    ///
    /// # 参数
    /// - `path`: 接口路径，带不带前缀均可
    /// - `options`: 方法、请求头、数据
    ///
    /// # 返回
    /// 2xx 时返回解码结果；其他情况返回对应的 [`GatewayError`]
    pub async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> GatewayResult<T> {
        let descriptor = self.build_descriptor(path, options)?;
        let url = descriptor.url.clone();

        let body = self.execute(descriptor).await.into_result(&url)?;

        serde_json::from_value(body).map_err(|source| GatewayError::Decode { url, source })
    }

    /// 发送请求，返回未解码的 JSON
    pub async fn send_value(&self, path: &str, options: RequestOptions) -> GatewayResult<Value> {
        self.send(path, options).await
    }

    /// 按状态码分类响应，401 时触发会话失效处理
    pub(crate) fn classify(&self, status: u16, body: Value) -> ResponseOutcome {
        if (200..300).contains(&status) {
            return ResponseOutcome::Success { status, body };
        }

        if status == 401 {
            if let Some(invalidator) = &self.invalidator {
                invalidator.on_unauthorized();
                return ResponseOutcome::Unauthorized { body };
            }
            debug!("401 处理已关闭，按普通错误返回");
        }

        ResponseOutcome::ApplicationError { status, body }
    }
}
