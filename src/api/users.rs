//! 用户管理

use super::{payload, ApiClient};
use crate::error::GatewayResult;
use crate::gateway::RequestOptions;
use crate::models::{User, UserPatch, UsersPage, UsersSimplePage};
use serde_json::{json, Value};

/// 分页与筛选条件，`None` 的条件不会出现在查询串中
fn list_query(skip: u32, limit: u32, account: Option<&str>, email: Option<&str>) -> Value {
    json!({
        "skip": skip,
        "limit": limit,
        "account": account,
        "email": email
    })
}

impl ApiClient {
    /// 用户列表
    ///
    /// # 参数
    /// - `skip` / `limit`: 分页
    /// - `account` / `email`: 模糊筛选，可省略
    pub async fn users(
        &self,
        skip: u32,
        limit: u32,
        account: Option<&str>,
        email: Option<&str>,
    ) -> GatewayResult<UsersPage> {
        self.gateway
            .send(
                "/users",
                RequestOptions::get().data(list_query(skip, limit, account, email)),
            )
            .await
    }

    /// 精简用户列表（含角色）
    pub async fn users_simple(
        &self,
        skip: u32,
        limit: u32,
        account: Option<&str>,
        email: Option<&str>,
    ) -> GatewayResult<UsersSimplePage> {
        self.gateway
            .send(
                "/users/simple",
                RequestOptions::get().data(list_query(skip, limit, account, email)),
            )
            .await
    }

    pub async fn get_user(&self, id: i64) -> GatewayResult<User> {
        self.gateway
            .send(&format!("/users/{}", id), RequestOptions::get())
            .await
    }

    pub async fn update_user(&self, id: i64, patch: &UserPatch) -> GatewayResult<User> {
        let path = format!("/users/{}", id);
        let data = payload(&path, patch)?;
        self.gateway.send(&path, RequestOptions::put(data)).await
    }

    pub async fn delete_user(&self, id: i64) -> GatewayResult<()> {
        self.send_unit(&format!("/users/{}", id), RequestOptions::delete())
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{harness, url};
    use crate::infrastructure::HttpMethod;
    use crate::models::UserPatch;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn list_filters_go_into_query_string() {
        let h = harness();
        h.transport.respond(
            &url("/users/simple"),
            200,
            json!({"total": 1, "items": [{"id": 1, "account": "alice", "status": "ACTIVE", "role": null}]}),
        );

        let page = h.client.users_simple(0, 20, Some("ali"), None).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].role, None);

        let request = &h.transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.body.is_none());
        let parsed = reqwest::Url::parse(&request.url).unwrap();
        let query: BTreeMap<String, String> = parsed.query_pairs().into_owned().collect();
        assert_eq!(parsed.path(), "/api/v1/users/simple");
        assert_eq!(query.get("account").map(String::as_str), Some("ali"));
        assert_eq!(query.get("limit").map(String::as_str), Some("20"));
        assert_eq!(query.get("skip").map(String::as_str), Some("0"));
        assert!(!query.contains_key("email"));
    }

    #[tokio::test]
    async fn update_sends_only_set_fields() {
        let h = harness();
        h.transport.respond(&url("/users/3"), 200, json!({"id": 3, "account": "c", "nickname": "新名字"}));

        let patch = UserPatch {
            nickname: Some("新名字".into()),
            ..UserPatch::default()
        };
        let user = h.client.update_user(3, &patch).await.unwrap();
        assert_eq!(user.nickname.as_deref(), Some("新名字"));
        assert_eq!(h.transport.requests()[0].body, Some(json!({"nickname": "新名字"})));
    }

    #[tokio::test]
    async fn delete_missing_user_is_application_error() {
        let h = harness();
        h.transport
            .respond(&url("/users/99"), 404, json!({"detail": "用户不存在"}));

        let err = h.client.delete_user(99).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(h.transport.requests()[0].method, HttpMethod::Delete);
    }
}
