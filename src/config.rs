//! 客户端配置
//!
//! 启动时读取一次（环境变量或 TOML 文件），之后不可变。

use crate::error::ConfigError;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// 基础地址格式：协议 + 主机[:端口]，可带路径
const BASE_ORIGIN_PATTERN: &str = r"^https?://[^/\s?#]+(/[^\s?#]*)?$";

/// 接口地址配置
///
/// 由 `EndpointConfig::new` 校验后构造，非法的地址在启动时就报错，
/// 不会拖到请求时才拼出错误的 URL。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointConfig {
    base_origin: String,
    path_prefix: String,
}

impl EndpointConfig {
    /// 校验并创建接口地址配置
    ///
    /// # 参数
    /// - `base_origin`: 后端地址，如 `http://127.0.0.1:8000`
    /// - `path_prefix`: 路径前缀，如 `/api/v1`，空串表示根路径
    pub fn new(
        base_origin: impl Into<String>,
        path_prefix: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let base_origin = base_origin.into().trim().to_string();
        let path_prefix = path_prefix.into().trim().to_string();

        let base_ok = Regex::new(BASE_ORIGIN_PATTERN)
            .map(|re| re.is_match(&base_origin))
            .unwrap_or(false);
        if !base_ok {
            return Err(ConfigError::InvalidBaseOrigin { value: base_origin });
        }

        if path_prefix
            .chars()
            .any(|c| c.is_whitespace() || c == '?' || c == '#')
        {
            return Err(ConfigError::InvalidPathPrefix { value: path_prefix });
        }

        Ok(Self {
            base_origin,
            path_prefix,
        })
    }

    pub fn base_origin(&self) -> &str {
        &self.base_origin
    }

    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }
}

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// 后端地址
    pub base_origin: String,
    /// 接口路径前缀
    pub path_prefix: String,
    /// 传输层超时（秒），原样交给 HTTP 客户端
    pub request_timeout_secs: u64,
    /// 凭证持久化文件，未设置时只保存在内存中
    pub token_storage_path: Option<String>,
    /// 凭证在存储中的键名
    pub token_key: String,
    /// 登录页路由
    pub login_route: String,
    /// 401 之后跳转登录页的延迟（毫秒）
    pub redirect_delay_ms: u64,
    /// 收到 401 时是否强制登出
    pub invalidate_on_unauthorized: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_origin: "http://127.0.0.1:8000".to_string(),
            path_prefix: "/api/v1".to_string(),
            request_timeout_secs: 30,
            token_storage_path: None,
            token_key: "token".to_string(),
            login_route: "/pages/login/login".to_string(),
            redirect_delay_ms: 1500,
            invalidate_on_unauthorized: true,
            verbose_logging: false,
        }
    }
}

impl ClientConfig {
    /// 从进程环境变量读取配置
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取配置
    ///
    /// 数字和布尔值无法解析时直接报错，不静默使用默认值。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let config = Self {
            base_origin: lookup("API_BASE_URL")
                .or_else(|| lookup("API_BASE"))
                .unwrap_or(default.base_origin),
            path_prefix: lookup("API_PREFIX").unwrap_or(default.path_prefix),
            request_timeout_secs: parse_var(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                default.request_timeout_secs,
                "u64",
            )?,
            token_storage_path: lookup("TOKEN_STORAGE_PATH").or(default.token_storage_path),
            token_key: lookup("TOKEN_KEY").unwrap_or(default.token_key),
            login_route: lookup("LOGIN_ROUTE").unwrap_or(default.login_route),
            redirect_delay_ms: parse_var(
                &lookup,
                "REDIRECT_DELAY_MS",
                default.redirect_delay_ms,
                "u64",
            )?,
            invalidate_on_unauthorized: parse_var(
                &lookup,
                "INVALIDATE_ON_UNAUTHORIZED",
                default.invalidate_on_unauthorized,
                "bool",
            )?,
            verbose_logging: parse_var(
                &lookup,
                "VERBOSE_LOGGING",
                default.verbose_logging,
                "bool",
            )?,
        };
        config.endpoint()?;
        Ok(config)
    }

    /// 从 TOML 文件读取配置，缺省的字段取默认值
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadFailed {
                path: path.display().to_string(),
                source,
            })?;

        let config: Self =
            toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
                path: path.display().to_string(),
                source,
            })?;

        config.endpoint()?;
        Ok(config)
    }

    /// 校验并取出接口地址配置
    pub fn endpoint(&self) -> Result<EndpointConfig, ConfigError> {
        EndpointConfig::new(self.base_origin.clone(), self.path_prefix.clone())
    }
}

fn parse_var<F, T>(lookup: &F, var_name: &str, default: T, expected_type: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var_name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
    }
}
