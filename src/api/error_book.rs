//! 错题本
//!
//! 标记已掌握需要 PATCH，不在允许的方法列表内，因此没有提供。

use super::{payload, ApiClient};
use crate::error::GatewayResult;
use crate::gateway::RequestOptions;
use crate::models::{ErrorBookListResp, ErrorBookQuery, MessageResp};

impl ApiClient {
    /// 我的错题本
    pub async fn my_error_book(&self, query: &ErrorBookQuery) -> GatewayResult<ErrorBookListResp> {
        let data = payload("/error-book", query)?;
        self.gateway
            .send("/error-book", RequestOptions::get().data(data))
            .await
    }

    /// 记录一次答错
    pub async fn record_wrong_answer(&self, question_id: i64) -> GatewayResult<MessageResp> {
        self.gateway
            .send(
                &format!("/error-book/{}/record", question_id),
                RequestOptions::new().method("POST"),
            )
            .await
    }

    pub async fn delete_error_record(&self, question_id: i64) -> GatewayResult<MessageResp> {
        self.gateway
            .send(
                &format!("/error-book/{}", question_id),
                RequestOptions::delete(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{harness, url};
    use crate::infrastructure::HttpMethod;
    use crate::models::ErrorBookQuery;
    use serde_json::json;

    #[tokio::test]
    async fn list_uses_default_paging() {
        let h = harness();
        h.transport.respond(
            &url("/error-book"),
            200,
            json!({
                "total": 1,
                "page": 1,
                "size": 10,
                "items": [{
                    "id": 1,
                    "question_id": 501,
                    "wrong_count": 2,
                    "mastered": false,
                    "stem": "1+1=?"
                }]
            }),
        );

        let page = h.client.my_error_book(&ErrorBookQuery::default()).await.unwrap();
        assert_eq!(page.items[0].wrong_count, 2);
        assert_eq!(page.items[0].next_review_time, None);

        let request_url = &h.transport.requests()[0].url;
        assert!(request_url.contains("page=1"));
        assert!(request_url.contains("size=10"));
        assert!(request_url.contains("only_due=false"));
        assert!(request_url.contains("include_mastered=false"));
    }

    #[tokio::test]
    async fn record_and_delete_use_question_id() {
        let h = harness();
        h.transport
            .respond(&url("/error-book/501/record"), 200, json!({"message": "已记录错误"}));
        h.transport
            .respond(&url("/error-book/501"), 200, json!({"message": "已删除"}));

        let recorded = h.client.record_wrong_answer(501).await.unwrap();
        assert_eq!(recorded.message.as_deref(), Some("已记录错误"));
        h.client.delete_error_record(501).await.unwrap();

        let methods: Vec<HttpMethod> = h.transport.requests().iter().map(|r| r.method).collect();
        assert_eq!(methods, vec![HttpMethod::Post, HttpMethod::Delete]);
    }
}
