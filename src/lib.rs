//! # Quiz API Client
//!
//! 刷题小程序后端的 HTTP 客户端
//!
//! ## 架构设计
//!
//! 本库采用四层结构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有外部资源，只暴露能力
//! - `Transport` - HTTP 传输（`ReqwestTransport` 为生产实现）
//! - `KeyValueStore` - 登录凭证存储（内存 / JSON 文件）
//! - `Navigator` - 提示与页面跳转
//!
//! ### ② 网关层（Gateway）
//! - `gateway/` - 所有请求的唯一出口
//! - 地址拼接、方法规范化、鉴权注入、响应分类
//! - 401 时清除凭证并跳转登录页（`SessionInvalidator`）
//! - 多候选接口回退（`resolve_first`）
//!
//! ### ③ 接口层（Api）
//! - `api/` - 按业务分组的类型化接口（`ApiClient`）
//! - `models/` - 请求/响应数据结构
//!
//! ### ④ 入口（Binary）
//! - `main.rs` - 读取环境配置，做一次健康检查
//!
//! ## 模块结构

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod infrastructure;
pub mod models;
pub mod utils;

// 重新导出常用类型
pub use api::ApiClient;
pub use config::{ClientConfig, EndpointConfig};
pub use error::{ConfigError, GatewayError, GatewayResult, StorageError, TransportError};
pub use gateway::{ClientContext, Gateway, RequestOptions, ResponseOutcome, SessionPolicy};
pub use infrastructure::{FileStore, KeyValueStore, MemoryStore, Navigator, ReqwestTransport, Transport};
