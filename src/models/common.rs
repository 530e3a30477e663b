use serde::{Deserialize, Serialize};

/// 健康检查结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub db: Option<String>,
}

/// 只带提示文字的响应，如 `{"message": "已删除"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResp {
    #[serde(default)]
    pub message: Option<String>,
}
