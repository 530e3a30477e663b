//! 文件上传/下载
//!
//! 地址拼接和鉴权与 JSON 请求一致，只按状态码判断成败。

use crate::error::{GatewayError, GatewayResult, TransportError};
use crate::gateway::request_gateway::Gateway;
use crate::infrastructure::{DownloadRequest, Headers, HttpMethod, UploadRequest};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

impl Gateway {
    /// 上传本地文件（multipart/form-data）
    ///
    /// # 参数
    /// - `path`: 接口路径
    /// - `file_path`: 本地文件
    /// - `field_name`: 表单中的文件字段名
    /// - `form_data`: 附加的文本字段
    ///
    /// # 返回
    /// 服务端返回的 JSON
    pub async fn upload_file(
        &self,
        path: &str,
        file_path: impl Into<PathBuf>,
        field_name: &str,
        form_data: BTreeMap<String, String>,
    ) -> GatewayResult<Value> {
        let url = self.resolve(path);
        let headers = self.auth.auth_headers(&Headers::new())?;
        let request = UploadRequest {
            url: url.clone(),
            headers,
            file_path: file_path.into(),
            field_name: field_name.to_string(),
            form_data,
        };

        self.observer.on_request(HttpMethod::Post, &url, None);

        match self.transport.upload(request).await {
            Ok(raw) => {
                self.observer
                    .on_response(HttpMethod::Post, &url, raw.status, &raw.body);
                self.classify(raw.status, raw.body).into_result(&url)
            }
            Err(e) => {
                self.observer.on_transport_error(HttpMethod::Post, &url, &e);
                Err(GatewayError::Transport { url, source: e })
            }
        }
    }

    /// 下载文件到本地
    ///
    /// # 返回
    /// 写入的本地文件路径
    pub async fn download_file(
        &self,
        path: &str,
        destination: impl Into<PathBuf>,
    ) -> GatewayResult<PathBuf> {
        let url = self.resolve(path);
        let headers = self.auth.auth_headers(&Headers::new())?;
        let request = DownloadRequest {
            url: url.clone(),
            headers,
            destination: destination.into(),
        };

        self.observer.on_request(HttpMethod::Get, &url, None);

        let response = match self.transport.download(request).await {
            Ok(response) => response,
            Err(e) => {
                self.observer.on_transport_error(HttpMethod::Get, &url, &e);
                return Err(GatewayError::Transport { url, source: e });
            }
        };

        self.observer
            .on_response(HttpMethod::Get, &url, response.status, &response.body);

        self.classify(response.status, response.body)
            .into_result(&url)?;

        response.file_path.ok_or_else(|| GatewayError::Transport {
            url,
            source: TransportError::Other("下载成功但没有写入文件".to_string()),
        })
    }
}
