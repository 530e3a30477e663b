use serde_json::Value;
use thiserror::Error;

/// 登录失效时给用户的提示
pub const SESSION_EXPIRED_NOTICE: &str = "登录已过期，请重新登录";

/// 服务端未提供说明时的通用失败提示
pub const GENERIC_FAILURE_NOTICE: &str = "请求失败";

/// 网关错误类型
///
/// 每次请求最多产生一个错误，错误里保留服务端返回的状态码和响应体，
/// 调用方可以据此自行展示或重试。
#[derive(Debug, Error)]
pub enum GatewayError {
    /// 客户端配置错误（启动时即失败）
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 401，已触发强制登出
    #[error("登录已失效 ({url})")]
    Unauthorized { url: String, body: Value },

    /// 其他非 2xx 响应
    #[error("API返回错误响应 ({url}): status={status}, body={body}")]
    Application { status: u16, url: String, body: Value },

    /// 没有拿到任何响应（断网、DNS、传输层超时）
    #[error("API请求失败 ({url}): {source}")]
    Transport {
        url: String,
        #[source]
        source: TransportError,
    },

    /// 响应体无法解码为期望的类型
    #[error("响应解析失败 ({url}): {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// 请求数据无法序列化为 JSON
    #[error("请求数据序列化失败 ({path}): {source}")]
    Encode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// 凭证存储读写失败
    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),
}

impl GatewayError {
    /// 服务端状态码（没有响应时为 None）
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Unauthorized { .. } => Some(401),
            GatewayError::Application { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, GatewayError::Unauthorized { .. })
    }

    /// 面向用户的提示文本
    ///
    /// 优先使用服务端返回的 `message` / `detail`，否则返回通用提示。
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Unauthorized { .. } => SESSION_EXPIRED_NOTICE.to_string(),
            GatewayError::Application { body, .. } => {
                server_message(body).unwrap_or_else(|| GENERIC_FAILURE_NOTICE.to_string())
            }
            _ => GENERIC_FAILURE_NOTICE.to_string(),
        }
    }
}

/// 从服务端错误体中提取说明文字
///
/// 后端的错误体有两种形态：`{"code", "message", "data"}` 和 `{"detail"}`。
pub fn server_message(body: &Value) -> Option<String> {
    ["message", "detail"]
        .iter()
        .filter_map(|key| body.get(*key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

/// 传输层错误
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP 客户端报告的失败
    #[error("网络请求失败: {0}")]
    Http(#[from] reqwest::Error),

    /// 上传/下载时本地文件读写失败
    #[error("文件读写失败 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("传输失败: {0}")]
    Other(String),
}

/// 凭证存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("读取存储文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("写入存储文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("存储文件格式错误 ({path}): {source}")]
    Corrupted {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("存储锁已损坏")]
    Poisoned,
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 基础地址必须形如 `http(s)://host[:port]`
    #[error("无效的基础地址: '{value}'")]
    InvalidBaseOrigin { value: String },

    #[error("无效的路径前缀: '{value}'")]
    InvalidPathPrefix { value: String },

    #[error("无法拼接请求地址 {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },

    #[error("读取配置文件失败 ({path}): {source}")]
    FileReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("HTTP 客户端初始化失败: {0}")]
    HttpClientBuildFailed(#[source] reqwest::Error),
}

/// 网关结果类型
pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_message_prefers_server_text() {
        let err = GatewayError::Application {
            status: 400,
            url: "http://x/api/v1/login".into(),
            body: json!({"code": 400, "message": "账号或密码错误"}),
        };
        assert_eq!(err.user_message(), "账号或密码错误");
        assert_eq!(err.status(), Some(400));

        let err = GatewayError::Application {
            status: 404,
            url: "http://x/api/v1/users/9".into(),
            body: json!({"detail": "用户不存在"}),
        };
        assert_eq!(err.user_message(), "用户不存在");
    }

    #[test]
    fn user_message_falls_back_to_generic() {
        let err = GatewayError::Application {
            status: 500,
            url: "http://x".into(),
            body: Value::String("Internal Server Error".into()),
        };
        assert_eq!(err.user_message(), GENERIC_FAILURE_NOTICE);

        let err = GatewayError::Transport {
            url: "http://x".into(),
            source: TransportError::Other("offline".into()),
        };
        assert_eq!(err.user_message(), GENERIC_FAILURE_NOTICE);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn unauthorized_reports_session_expired() {
        let err = GatewayError::Unauthorized {
            url: "http://x/api/v1/me".into(),
            body: Value::Null,
        };
        assert!(err.is_unauthorized());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.user_message(), SESSION_EXPIRED_NOTICE);
    }
}
