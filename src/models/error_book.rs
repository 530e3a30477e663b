use serde::{Deserialize, Serialize};

/// 错题本条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBookItem {
    pub id: i64,
    pub question_id: i64,
    pub wrong_count: u32,
    #[serde(default)]
    pub first_wrong_time: Option<String>,
    #[serde(default)]
    pub last_wrong_time: Option<String>,
    #[serde(default)]
    pub next_review_time: Option<String>,
    pub mastered: bool,
    #[serde(default)]
    pub stem: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBookListResp {
    pub total: u64,
    pub page: u32,
    pub size: u32,
    pub items: Vec<ErrorBookItem>,
}

/// 错题本查询条件
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBookQuery {
    pub page: u32,
    pub size: u32,
    pub only_due: bool,
    pub include_mastered: bool,
}

impl Default for ErrorBookQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: 10,
            only_due: false,
            include_mastered: false,
        }
    }
}
