//! 单元测试用的假传输层、假界面和观测记录

use crate::error::TransportError;
use crate::gateway::observer::RequestObserver;
use crate::infrastructure::{
    DownloadRequest, DownloadResponse, HttpMethod, Navigator, RawResponse, Transport,
    TransportRequest, UploadRequest,
};
use futures::future::BoxFuture;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

pub const BASE: &str = "http://test.local";

#[derive(Clone)]
enum Script {
    Respond(u16, Value),
    Echo,
    Fail(String),
}

/// 按地址（不含查询串）返回固定响应的传输层，未登记的地址返回 404
#[derive(Default)]
pub struct ScriptedTransport {
    scripts: Mutex<HashMap<String, Script>>,
    requests: Mutex<Vec<TransportRequest>>,
    uploads: Mutex<Vec<UploadRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: &str, status: u16, body: Value) {
        self.script(url, Script::Respond(status, body));
    }

    pub fn echo(&self, url: &str) {
        self.script(url, Script::Echo);
    }

    pub fn fail(&self, url: &str, message: &str) {
        self.script(url, Script::Fail(message.to_string()));
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }

    pub fn uploads(&self) -> Vec<UploadRequest> {
        self.uploads.lock().unwrap().clone()
    }

    fn script(&self, url: &str, script: Script) {
        self.scripts.lock().unwrap().insert(url.to_string(), script);
    }

    fn lookup(&self, url: &str) -> Script {
        let key = url.split('?').next().unwrap_or(url);
        self.scripts
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .unwrap_or_else(|| Script::Respond(404, json!({"detail": "Not Found"})))
    }
}

impl Transport for ScriptedTransport {
    fn execute(
        &self,
        request: TransportRequest,
    ) -> BoxFuture<'_, Result<RawResponse, TransportError>> {
        let script = self.lookup(&request.url);
        let echoed = request.body.clone().unwrap_or(Value::Null);
        self.requests.lock().unwrap().push(request);

        Box::pin(async move {
            match script {
                Script::Respond(status, body) => Ok(RawResponse { status, body }),
                Script::Echo => Ok(RawResponse {
                    status: 200,
                    body: echoed,
                }),
                Script::Fail(message) => Err(TransportError::Other(message)),
            }
        })
    }

    fn upload(&self, request: UploadRequest) -> BoxFuture<'_, Result<RawResponse, TransportError>> {
        let script = self.lookup(&request.url);
        self.uploads.lock().unwrap().push(request);

        Box::pin(async move {
            match script {
                Script::Respond(status, body) => Ok(RawResponse { status, body }),
                Script::Echo => Ok(RawResponse {
                    status: 200,
                    body: Value::Null,
                }),
                Script::Fail(message) => Err(TransportError::Other(message)),
            }
        })
    }

    fn download(
        &self,
        request: DownloadRequest,
    ) -> BoxFuture<'_, Result<DownloadResponse, TransportError>> {
        let script = self.lookup(&request.url);

        Box::pin(async move {
            match script {
                Script::Respond(status, body) if (200..300).contains(&status) => {
                    let content = match &body {
                        Value::String(text) => text.clone(),
                        other => other.to_string(),
                    };
                    std::fs::write(&request.destination, content).map_err(|source| {
                        TransportError::Io {
                            path: request.destination.display().to_string(),
                            source,
                        }
                    })?;
                    Ok(DownloadResponse {
                        status,
                        file_path: Some(request.destination),
                        body: Value::Null,
                    })
                }
                Script::Respond(status, body) => Ok(DownloadResponse {
                    status,
                    file_path: None,
                    body,
                }),
                Script::Echo => Ok(DownloadResponse {
                    status: 204,
                    file_path: None,
                    body: Value::Null,
                }),
                Script::Fail(message) => Err(TransportError::Other(message)),
            }
        })
    }
}

/// 记录跳转与提示的界面
#[derive(Default)]
pub struct RecordingNavigator {
    redirects: Mutex<Vec<String>>,
    notices: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to(&self, route: &str) {
        self.redirects.lock().unwrap().push(route.to_string());
    }

    fn show_notice(&self, text: &str) {
        self.notices.lock().unwrap().push(text.to_string());
    }
}

/// 按顺序记录观测事件
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl RequestObserver for RecordingObserver {
    fn on_request(&self, method: HttpMethod, url: &str, _payload: Option<&Value>) {
        self.events
            .lock()
            .unwrap()
            .push(format!("request {} {}", method, url));
    }

    fn on_response(&self, _method: HttpMethod, url: &str, status: u16, _body: &Value) {
        self.events
            .lock()
            .unwrap()
            .push(format!("response {} {}", status, url));
    }

    fn on_transport_error(&self, _method: HttpMethod, url: &str, error: &TransportError) {
        self.events
            .lock()
            .unwrap()
            .push(format!("transport-error {} {}", url, error));
    }
}
