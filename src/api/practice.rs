//! 练习会话
//!
//! 创建会话后按序号逐题作答，最后结束会话拿到统计结果。

use super::ApiClient;
use crate::error::GatewayResult;
use crate::gateway::RequestOptions;
use crate::models::{CreateSessionResp, FinishResp, QuestionView, SubmitAnswerResp};
use serde_json::{json, Map, Value};
use tracing::info;

impl ApiClient {
    /// 创建练习会话
    ///
    /// # 参数
    /// - `size`: 题目数量
    pub async fn create_practice(&self, size: u32) -> GatewayResult<CreateSessionResp> {
        let session: CreateSessionResp = self
            .gateway
            .send("/practice/sessions", RequestOptions::post(json!({"size": size})))
            .await?;

        info!(
            "📝 练习已创建: attempt={}, 共 {} 题",
            session.attempt_id, session.total
        );
        Ok(session)
    }

    pub async fn get_practice_question(&self, attempt_id: i64, seq: u32) -> GatewayResult<QuestionView> {
        self.gateway
            .send(
                &format!("/practice/sessions/{}/questions/{}", attempt_id, seq),
                RequestOptions::get(),
            )
            .await
    }

    /// 提交单题答案
    ///
    /// # 参数
    /// - `attempt_id`: 会话编号
    /// - `seq`: 题目序号
    /// - `answer`: 用户答案
    /// - `time_spent_ms`: 作答耗时（毫秒），可省略
    ///
    /// # 返回
    /// 判题结果和正确答案
    pub async fn submit_practice_answer(
        &self,
        attempt_id: i64,
        seq: u32,
        answer: &str,
        time_spent_ms: Option<u64>,
    ) -> GatewayResult<SubmitAnswerResp> {
        let mut data = Map::new();
        data.insert("seq".into(), json!(seq));
        data.insert("user_answer".into(), json!(answer));
        if let Some(ms) = time_spent_ms {
            data.insert("time_spent_ms".into(), json!(ms));
        }

        self.gateway
            .send(
                &format!("/practice/sessions/{}/answers", attempt_id),
                RequestOptions::post(Value::Object(data)),
            )
            .await
    }

    /// 结束练习
    pub async fn finish_practice(&self, attempt_id: i64) -> GatewayResult<FinishResp> {
        let result: FinishResp = self
            .gateway
            .send(
                &format!("/practice/sessions/{}/finish", attempt_id),
                RequestOptions::new().method("POST"),
            )
            .await?;

        info!(
            "🏁 练习结束: 答对 {}/{}，用时 {} 秒",
            result.correct_count, result.total, result.duration_seconds
        );
        Ok(result)
    }
}
