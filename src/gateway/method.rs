//! 请求方法规范化

use crate::infrastructure::HttpMethod;
use phf::phf_map;
use tracing::warn;

/// 允许的请求方法（大写）
static ALLOWED_METHODS: phf::Map<&'static str, HttpMethod> = phf_map! {
    "OPTIONS" => HttpMethod::Options,
    "GET" => HttpMethod::Get,
    "HEAD" => HttpMethod::Head,
    "POST" => HttpMethod::Post,
    "PUT" => HttpMethod::Put,
    "DELETE" => HttpMethod::Delete,
    "TRACE" => HttpMethod::Trace,
    "CONNECT" => HttpMethod::Connect,
};

/// 规范化请求方法
///
/// 忽略大小写；未提供时为 `GET`。不在允许列表中的方法同样按 `GET` 发送，
/// 但会记录一条警告，方便发现调用方写错的方法名。
pub fn normalize_method(raw: Option<&str>) -> HttpMethod {
    let Some(raw) = raw.map(str::trim).filter(|m| !m.is_empty()) else {
        return HttpMethod::Get;
    };

    let upper = raw.to_ascii_uppercase();
    match ALLOWED_METHODS.get(upper.as_str()) {
        Some(method) => *method,
        None => {
            warn!("⚠️ 不支持的请求方法 {:?}，按 GET 发送", raw);
            HttpMethod::Get
        }
    }
}
