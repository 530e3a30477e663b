//! 题库
//!
//! 题目摘要和详情的后端路径在不同部署中不一致，按候选路径依次尝试，
//! 全部失败时返回占位数据而不是报错。

use super::{payload, ApiClient};
use crate::error::GatewayResult;
use crate::gateway::RequestOptions;
use crate::models::{BriefList, MyQuestionListResp, MyQuestionsQuery, QuestionBrief};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

const MY_QUESTIONS: &str = "/question-bank/my-questions";
/// 后端目前没有导入/导出路由，以下两个路径为约定的默认值
pub const DEFAULT_IMPORT_PATH: &str = "/question-bank/import";
pub const DEFAULT_EXPORT_PATH: &str = "/question-bank/export";

impl ApiClient {
    /// 我录入的题目
    pub async fn my_questions(&self, query: MyQuestionsQuery) -> GatewayResult<MyQuestionListResp> {
        let data = payload(MY_QUESTIONS, &query.normalized())?;
        self.gateway
            .send(MY_QUESTIONS, RequestOptions::get().data(data))
            .await
    }

    /// 批量获取题目摘要
    ///
    /// `ids` 为空时直接返回空列表，不发请求。
    pub async fn questions_brief(&self, ids: &[i64]) -> BriefList {
        if ids.is_empty() {
            return BriefList::default();
        }

        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let candidates = vec![
            format!("/question-bank/questions/brief?ids={}", joined),
            format!("/questions/brief?ids={}", joined),
        ];

        self.gateway.get_first(&candidates, BriefList::default).await
    }

    /// 获取题目详情，查不到时返回占位题目
    pub async fn question_detail(&self, id: i64) -> QuestionBrief {
        let candidates = vec![
            format!("/question-bank/questions/{}", id),
            format!("/questions/{}", id),
        ];

        self.gateway
            .get_first(&candidates, || QuestionBrief::placeholder(id))
            .await
    }

    /// 批量导入题目
    ///
    /// 导入路由尚未在后端落地，调用方可用 `path` 指定实际路径，
    /// 一般传 [`DEFAULT_IMPORT_PATH`]。
    ///
    /// # 参数
    /// - `path`: 导入接口路径
    /// - `file`: 本地题目文件，以 `file` 字段上传
    ///
    /// # 返回
    /// 服务端返回的导入结果
    pub async fn import_questions(&self, path: &str, file: impl Into<PathBuf>) -> GatewayResult<Value> {
        let file = file.into();
        info!("📤 导入题目: {}", file.display());
        self.gateway
            .upload_file(path, file, "file", BTreeMap::new())
            .await
    }

    /// 导出题目到本地文件
    ///
    /// 与导入相同，`path` 一般传 [`DEFAULT_EXPORT_PATH`]。
    pub async fn export_questions(
        &self,
        path: &str,
        destination: impl Into<PathBuf>,
    ) -> GatewayResult<PathBuf> {
        let written = self.gateway.download_file(path, destination).await?;
        info!("📥 题目已导出: {}", written.display());
        Ok(written)
    }
}
