//! 多候选接口回退
//!
//! 后端路径不固定的查询按顺序尝试候选路径，第一个成功的结果即返回；
//! 全部失败时返回调用方给定的默认值，从不向外抛错。

use crate::error::GatewayResult;
use crate::gateway::request::RequestOptions;
use crate::gateway::request_gateway::Gateway;
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::{debug, warn};

/// 所有候选均失败（只在本模块内部使用，最终转换为默认值）
#[derive(Debug)]
struct FallbackExhausted {
    attempted: usize,
    last_error: Option<String>,
}

async fn first_success<T, F, Fut>(candidates: &[String], mut attempt: F) -> Result<T, FallbackExhausted>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = GatewayResult<T>>,
{
    let mut last_error = None;

    for (index, candidate) in candidates.iter().enumerate() {
        match attempt(candidate.clone()).await {
            Ok(value) => {
                debug!("候选接口 #{} 成功: {}", index + 1, candidate);
                return Ok(value);
            }
            Err(e) => {
                debug!("候选接口 #{} 失败: {} ({})", index + 1, candidate, e);
                last_error = Some(e.to_string());
            }
        }
    }

    Err(FallbackExhausted {
        attempted: candidates.len(),
        last_error,
    })
}

/// 按顺序尝试候选，返回第一个成功结果，全部失败时返回默认值
///
/// # 参数
/// - `candidates`: 候选路径，按顺序尝试；成功后不再尝试后面的候选
/// - `attempt`: 对单个候选发起请求
/// - `default`: 全部失败时生成默认值
pub async fn resolve_first<T, F, Fut, D>(candidates: &[String], attempt: F, default: D) -> T
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = GatewayResult<T>>,
    D: FnOnce() -> T,
{
    match first_success(candidates, attempt).await {
        Ok(value) => value,
        Err(exhausted) => {
            warn!(
                "⚠️ {} 个候选接口全部失败，使用默认值 (最后错误: {})",
                exhausted.attempted,
                exhausted.last_error.as_deref().unwrap_or("无")
            );
            default()
        }
    }
}

impl Gateway {
    /// 依次以 GET 请求候选路径
    pub async fn get_first<T, D>(&self, candidates: &[String], default: D) -> T
    where
        T: DeserializeOwned,
        D: FnOnce() -> T,
    {
        resolve_first(
            candidates,
            |path| async move { self.send::<T>(&path, RequestOptions::get()).await },
            default,
        )
        .await
    }
}
