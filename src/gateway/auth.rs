//! 鉴权头注入

use crate::error::StorageError;
use crate::infrastructure::{Headers, KeyValueStore};
use std::sync::Arc;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";

/// 鉴权头注入器
///
/// 只读取凭证，从不修改存储。
#[derive(Clone)]
pub struct AuthInjector {
    store: Arc<dyn KeyValueStore>,
    token_key: String,
}

impl AuthInjector {
    pub fn new(store: Arc<dyn KeyValueStore>, token_key: impl Into<String>) -> Self {
        Self {
            store,
            token_key: token_key.into(),
        }
    }

    /// 读取当前凭证，空串视为没有凭证
    pub fn token(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .store
            .get(&self.token_key)?
            .filter(|token| !token.trim().is_empty()))
    }

    /// 生成 JSON 请求的请求头
    ///
    /// 合并顺序：默认 `Content-Type: application/json` → 调用方请求头 →
    /// `Authorization: Bearer <token>`（仅在有凭证时）。键名不区分大小写。
    pub fn headers(&self, existing: &Headers) -> Result<Headers, StorageError> {
        let mut headers = Headers::new();
        headers.insert(CONTENT_TYPE.to_string(), "application/json".to_string());
        self.merge(headers, existing)
    }

    /// 生成文件上传/下载的请求头（不带默认 `Content-Type`）
    pub fn auth_headers(&self, existing: &Headers) -> Result<Headers, StorageError> {
        self.merge(Headers::new(), existing)
    }

    fn merge(&self, mut headers: Headers, existing: &Headers) -> Result<Headers, StorageError> {
        for (key, value) in existing {
            insert_header(&mut headers, key, value);
        }
        if let Some(token) = self.token()? {
            insert_header(&mut headers, AUTHORIZATION, &format!("Bearer {}", token));
        }
        Ok(headers)
    }
}

/// 写入请求头，替换大小写不同的同名键
pub fn insert_header(headers: &mut Headers, key: &str, value: &str) {
    headers.retain(|existing, _| !existing.eq_ignore_ascii_case(key));
    headers.insert(key.to_string(), value.to_string());
}
