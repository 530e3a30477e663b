use serde::{Deserialize, Serialize};

/// 我录入的题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyQuestionItem {
    pub question_id: i64,
    #[serde(rename = "type")]
    pub question_type: String,
    #[serde(default)]
    pub difficulty: Option<i32>,
    pub stem: String,
    pub audit_status: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyQuestionListResp {
    pub total: u64,
    pub page: u32,
    pub size: u32,
    pub items: Vec<MyQuestionItem>,
}

/// 我的题目查询条件
///
/// 未设置的可选条件不会出现在查询串中。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MyQuestionsQuery {
    pub page: u32,
    pub size: u32,
    pub active_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qtype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<i32>,
}

impl Default for MyQuestionsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: 10,
            active_only: false,
            keyword: None,
            qtype: None,
            difficulty: None,
        }
    }
}

impl MyQuestionsQuery {
    /// 空关键字视为未设置
    pub fn normalized(mut self) -> Self {
        self.page = self.page.max(1);
        self.size = self.size.max(1);
        self.keyword = self.keyword.filter(|k| !k.trim().is_empty());
        self.qtype = self.qtype.filter(|t| !t.trim().is_empty());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
}

/// 题目摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBrief {
    pub id: i64,
    pub stem: String,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    #[serde(default)]
    pub analysis: Option<String>,
}

impl QuestionBrief {
    /// 查询不到题目时显示的占位记录
    pub fn placeholder(id: i64) -> Self {
        Self {
            id,
            stem: format!("#{}", id),
            options: Vec::new(),
            analysis: Some(String::new()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefList {
    #[serde(default)]
    pub items: Vec<QuestionBrief>,
}
