//! 请求网关层
//!
//! ```text
//! Gateway::send
//!     ├─ url::resolve_url        拼接地址（去重前缀）
//!     ├─ method::normalize_method 规范化方法
//!     ├─ auth::AuthInjector      注入鉴权头
//!     ├─ Transport::execute      发送
//!     └─ classify                2xx / 401 / 其他 / 传输失败
//!             └─ session::SessionInvalidator（401）
//! fallback::resolve_first       多候选接口回退
//! ```

pub mod auth;
pub mod context;
pub mod fallback;
pub mod method;
pub mod observer;
pub mod request;
pub mod request_gateway;
pub mod session;
pub mod transfer;
pub mod url;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::AuthInjector;
pub use context::{ClientContext, SessionPolicy};
pub use fallback::resolve_first;
pub use method::normalize_method;
pub use observer::{RequestObserver, TracingObserver};
pub use request::{FailureKind, RequestDescriptor, RequestOptions, ResponseOutcome};
pub use request_gateway::Gateway;
pub use session::SessionInvalidator;
pub use url::{append_query, resolve_url};
