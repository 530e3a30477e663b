//! 传输层 - 基础设施层
//!
//! 只负责"把请求发出去、把响应拿回来"，不做状态码判断。

use crate::error::{ConfigError, TransportError};
use futures::future::BoxFuture;
use futures::StreamExt;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// 请求头集合
pub type Headers = BTreeMap<String, String>;

/// 允许使用的 HTTP 方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Options,
    Get,
    Head,
    Post,
    Put,
    Delete,
    Trace,
    Connect,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Trace => "TRACE",
            HttpMethod::Connect => "CONNECT",
        }
    }

    /// 是否把数据放进请求体（其余方法走查询串）
    pub fn carries_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }

    fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Options => reqwest::Method::OPTIONS,
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Head => reqwest::Method::HEAD,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Trace => reqwest::Method::TRACE,
            HttpMethod::Connect => reqwest::Method::CONNECT,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 发给传输层的 JSON 请求
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Headers,
    pub body: Option<Value>,
}

/// 传输层拿到的原始响应
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Value,
}

/// 文件上传请求（multipart）
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub url: String,
    pub headers: Headers,
    pub file_path: PathBuf,
    pub field_name: String,
    pub form_data: BTreeMap<String, String>,
}

/// 文件下载请求
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub url: String,
    pub headers: Headers,
    pub destination: PathBuf,
}

/// 文件下载结果
///
/// 只有 2xx 时才会写入 `file_path`；其他状态码时 `body` 为服务端错误体。
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadResponse {
    pub status: u16,
    pub file_path: Option<PathBuf>,
    pub body: Value,
}

/// 传输层抽象
///
/// 每次调用只会得到一个结果：拿到响应（任意状态码）或传输失败。
pub trait Transport: Send + Sync {
    /// 发送 JSON 请求
    fn execute(&self, request: TransportRequest)
        -> BoxFuture<'_, Result<RawResponse, TransportError>>;

    /// 以 multipart 方式上传本地文件
    fn upload(&self, request: UploadRequest) -> BoxFuture<'_, Result<RawResponse, TransportError>>;

    /// 下载响应体到本地文件
    fn download(
        &self,
        request: DownloadRequest,
    ) -> BoxFuture<'_, Result<DownloadResponse, TransportError>>;
}

/// 把响应体字节解码为 JSON
///
/// 空响应体为 `null`，非 JSON 文本原样作为字符串返回。
pub fn decode_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

/// 基于 reqwest 的传输实现
#[derive(Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// 创建传输层
    ///
    /// # 参数
    /// - `timeout`: 整个请求的超时，由 reqwest 负责执行
    pub fn new(timeout: Duration) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ConfigError::HttpClientBuildFailed)?;
        Ok(Self { http })
    }

    /// 使用已有的 reqwest 客户端
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    fn builder(&self, method: HttpMethod, url: &str, headers: &Headers) -> reqwest::RequestBuilder {
        headers
            .iter()
            .fold(self.http.request(method.to_reqwest(), url), |builder, (k, v)| {
                builder.header(k.as_str(), v.as_str())
            })
    }
}

impl ReqwestTransport {
    async fn send_json(&self, request: TransportRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self.builder(request.method, &request.url, &request.headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        Ok(RawResponse {
            status,
            body: decode_body(&bytes),
        })
    }

    async fn send_multipart(&self, request: UploadRequest) -> Result<RawResponse, TransportError> {
        let data = tokio::fs::read(&request.file_path)
            .await
            .map_err(|source| TransportError::Io {
                path: request.file_path.display().to_string(),
                source,
            })?;

        let file_name = request
            .file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        debug!("上传文件 {} ({} 字节)", file_name, data.len());

        let mut form = reqwest::multipart::Form::new().part(
            request.field_name.clone(),
            reqwest::multipart::Part::bytes(data).file_name(file_name),
        );
        for (key, value) in &request.form_data {
            form = form.text(key.clone(), value.clone());
        }

        let response = self
            .builder(HttpMethod::Post, &request.url, &request.headers)
            .multipart(form)
            .send()
            .await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        Ok(RawResponse {
            status,
            body: decode_body(&bytes),
        })
    }

    async fn stream_to_file(
        &self,
        request: DownloadRequest,
    ) -> Result<DownloadResponse, TransportError> {
        let response = self
            .builder(HttpMethod::Get, &request.url, &request.headers)
            .send()
            .await?;
        let status = response.status().as_u16();

        if !(200..300).contains(&status) {
            let bytes = response.bytes().await?;
            return Ok(DownloadResponse {
                status,
                file_path: None,
                body: decode_body(&bytes),
            });
        }

        if let Err(e) = write_stream(response, &request.destination).await {
            // 不留下写了一半的文件
            if let Err(rm) = tokio::fs::remove_file(&request.destination).await {
                debug!("清理未完成的下载文件失败: {}", rm);
            }
            return Err(e);
        }

        Ok(DownloadResponse {
            status,
            file_path: Some(request.destination),
            body: Value::Null,
        })
    }
}

/// 把响应体逐块写入文件
async fn write_stream(response: reqwest::Response, destination: &Path) -> Result<(), TransportError> {
    let path_text = destination.display().to_string();
    let io_err = |source: std::io::Error| TransportError::Io {
        path: path_text.clone(),
        source,
    };

    let mut file = tokio::fs::File::create(destination).await.map_err(io_err)?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        file.write_all(&chunk?).await.map_err(io_err)?;
    }
    file.flush().await.map_err(io_err)?;
    Ok(())
}

impl Transport for ReqwestTransport {
    fn execute(
        &self,
        request: TransportRequest,
    ) -> BoxFuture<'_, Result<RawResponse, TransportError>> {
        Box::pin(self.send_json(request))
    }

    fn upload(&self, request: UploadRequest) -> BoxFuture<'_, Result<RawResponse, TransportError>> {
        Box::pin(self.send_multipart(request))
    }

    fn download(
        &self,
        request: DownloadRequest,
    ) -> BoxFuture<'_, Result<DownloadResponse, TransportError>> {
        Box::pin(self.stream_to_file(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_decodes_to_null() {
        assert_eq!(decode_body(b""), Value::Null);
        assert_eq!(decode_body(b"  \n"), Value::Null);
    }

    #[test]
    fn json_and_text_bodies() {
        assert_eq!(decode_body(br#"{"ok":true}"#), json!({"ok": true}));
        assert_eq!(
            decode_body(b"Bad Gateway"),
            Value::String("Bad Gateway".to_string())
        );
    }

    #[tokio::test]
    async fn interrupted_download_leaves_no_partial_file() {
        use tokio::io::AsyncReadExt;
        use tokio::net::TcpListener;

        // 声明 100 字节但只发 10 字节就断开
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n0123456789")
                .await;
            let _ = socket.flush().await;
        });

        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("export.csv");
        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();

        let result = transport
            .download(DownloadRequest {
                url: format!("http://{}/export", addr),
                headers: Headers::new(),
                destination: destination.clone(),
            })
            .await;

        assert!(result.is_err());
        assert!(!destination.exists());
    }

    #[test]
    fn only_post_and_put_carry_body() {
        assert!(HttpMethod::Post.carries_body());
        assert!(HttpMethod::Put.carries_body());
        assert!(!HttpMethod::Get.carries_body());
        assert!(!HttpMethod::Delete.carries_body());
        assert_eq!(HttpMethod::Connect.to_string(), "CONNECT");
    }
}
