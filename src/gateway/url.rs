//! 请求地址拼接
//!
//! `base + prefix + path`，调用方传入已带前缀的路径时不会重复拼接前缀。

use crate::error::ConfigError;
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

/// 拼接规范化的请求地址
///
/// # 参数
/// - `base_origin`: 后端地址，结尾的 `/` 会被去掉
/// - `path_prefix`: 路径前缀，空串或 `/` 表示根路径
/// - `path`: 接口路径，可以带也可以不带前缀，可以带查询串
///
/// # 返回
/// 路径部分（协议后的 `//` 除外）不含连续斜杠的地址；查询串原样保留，
/// 其中的 `//`（如 `?next=http://a//b`）不做处理
pub fn resolve_url(base_origin: &str, path_prefix: &str, path: &str) -> String {
    let base = base_origin.trim().trim_end_matches('/');
    let prefix = normalize_prefix(path_prefix);

    let (raw_path, query) = match path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (path, None),
    };

    let mut normalized = collapse_slashes(&format!("/{}", raw_path.trim()));
    if !prefix.is_empty() {
        if let Some(rest) = normalized.strip_prefix(prefix.as_str()) {
            normalized = rest.to_string();
        }
        // 前缀本身就是完整路径
        if normalized == "/" {
            normalized.clear();
        }
    }

    let mut url = format!("{}{}{}", base, prefix, normalized);
    if let Some(query) = query {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// 把对象形式的数据编码进查询串
///
/// `null` 字段被忽略；数组按逗号拼接；嵌套对象以 JSON 文本发送。
pub fn append_query(url: &str, data: &Value) -> Result<String, ConfigError> {
    let pairs: Vec<(String, String)> = match data {
        Value::Object(map) => map
            .iter()
            .filter_map(|(k, v)| query_value(v).map(|v| (k.clone(), v)))
            .collect(),
        Value::Null => Vec::new(),
        other => {
            debug!("忽略非对象查询参数: {}", other);
            Vec::new()
        }
    };

    if pairs.is_empty() {
        return Ok(url.to_string());
    }

    let mut parsed = Url::parse(url).map_err(|e| ConfigError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    parsed
        .query_pairs_mut()
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    Ok(parsed.to_string())
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(query_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

/// 规范化前缀：单个前导斜杠，无结尾斜杠，根路径为空串
fn normalize_prefix(prefix: &str) -> String {
    let collapsed = collapse_slashes(prefix.trim());
    let trimmed = collapsed.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

fn collapse_slashes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_slash = false;
    for c in text.chars() {
        if c == '/' {
            if previous_slash {
                continue;
            }
            previous_slash = true;
        } else {
            previous_slash = false;
        }
        out.push(c);
    }
    out
}
