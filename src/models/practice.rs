use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSessionResp {
    pub attempt_id: i64,
    pub paper_id: i64,
    pub total: u32,
    #[serde(default = "first_seq")]
    pub first_seq: u32,
}

fn first_seq() -> u32 {
    1
}

/// 练习中的单道题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub seq: u32,
    pub question_id: i64,
    #[serde(rename = "type")]
    pub question_type: String,
    #[serde(default)]
    pub difficulty: Option<i32>,
    pub stem: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAnswerResp {
    pub seq: u32,
    pub correct: bool,
    pub correct_answer: String,
    pub total: u32,
}

/// 练习结束时的统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishResp {
    pub total: u32,
    pub answered: u32,
    pub correct_count: u32,
    pub accuracy: f64,
    pub duration_seconds: u64,
}
