//! 登录、注册与当前用户

use super::ApiClient;
use crate::error::GatewayResult;
use crate::gateway::RequestOptions;
use crate::models::{Token, User, UserInfo};
use serde_json::{json, Map, Value};
use tracing::info;

impl ApiClient {
    /// 登录
    ///
    /// 成功后把 `access_token` 写入凭证存储，后续请求自动携带。
    ///
    /// # 参数
    /// - `account`: 账号
    /// - `password`: 密码
    pub async fn login(&self, account: &str, password: &str) -> GatewayResult<Token> {
        let token: Token = self
            .gateway
            .send(
                "/login",
                RequestOptions::post(json!({"account": account, "password": password})),
            )
            .await?;

        self.gateway.store_token(&token.access_token)?;
        info!("✅ 登录成功: {}", account);
        Ok(token)
    }

    /// 注册新账号，邮箱和昵称可省略
    pub async fn register(
        &self,
        account: &str,
        password: &str,
        email: Option<&str>,
        nickname: Option<&str>,
    ) -> GatewayResult<User> {
        let mut data = Map::new();
        data.insert("account".into(), json!(account));
        data.insert("password".into(), json!(password));
        if let Some(email) = email {
            data.insert("email".into(), json!(email));
        }
        if let Some(nickname) = nickname {
            data.insert("nickname".into(), json!(nickname));
        }

        self.gateway
            .send("/register", RequestOptions::post(Value::Object(data)))
            .await
    }

    pub async fn me(&self) -> GatewayResult<UserInfo> {
        self.gateway.send("/me", RequestOptions::get()).await
    }

    pub async fn update_my_nickname(&self, nickname: &str) -> GatewayResult<UserInfo> {
        self.gateway
            .send("/me/nickname", RequestOptions::put(json!({"nickname": nickname})))
            .await
    }

    /// 修改当前用户密码
    pub async fn change_my_password(&self, old_password: &str, new_password: &str) -> GatewayResult<()> {
        self.send_unit(
            "/me/password",
            RequestOptions::put(json!({
                "old_password": old_password,
                "new_password": new_password
            })),
        )
        .await
    }

    /// 登出：只清除本地凭证，不访问后端
    pub fn logout(&self) -> GatewayResult<()> {
        self.gateway.clear_token()?;
        info!("👋 已登出");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{harness, url};
    use crate::infrastructure::{HttpMethod, KeyValueStore};
    use serde_json::json;

    #[tokio::test]
    async fn login_stores_token_for_later_requests() {
        let h = harness();
        h.transport.respond(
            &url("/login"),
            200,
            json!({"access_token": "jwt-1", "token_type": "bearer"}),
        );
        h.transport.respond(
            &url("/me"),
            200,
            json!({"id": 1, "account": "alice", "status": "ACTIVE"}),
        );

        let token = h.client.login("alice", "secret").await.unwrap();
        assert_eq!(token.access_token, "jwt-1");
        assert_eq!(h.store.get("token").unwrap().as_deref(), Some("jwt-1"));

        let me = h.client.me().await.unwrap();
        assert_eq!(me.account, "alice");

        let requests = h.transport.requests();
        assert!(!requests[0].headers.contains_key("Authorization"));
        assert_eq!(
            requests[1].headers.get("Authorization").map(String::as_str),
            Some("Bearer jwt-1")
        );
    }

    #[tokio::test]
    async fn failed_login_keeps_store_untouched() {
        let h = harness();
        h.transport
            .respond(&url("/login"), 400, json!({"detail": "账号或密码错误"}));

        let err = h.client.login("alice", "wrong").await.unwrap_err();
        assert_eq!(err.user_message(), "账号或密码错误");
        assert_eq!(h.store.get("token").unwrap(), None);
    }

    #[tokio::test]
    async fn register_omits_missing_optional_fields() {
        let h = harness();
        h.transport.respond(
            &url("/register"),
            200,
            json!({"id": 7, "account": "bob"}),
        );

        let user = h.client.register("bob", "pw", None, Some("小明")).await.unwrap();
        assert_eq!(user.id, 7);

        let body = h.transport.requests()[0].body.clone().unwrap();
        assert_eq!(body, json!({"account": "bob", "password": "pw", "nickname": "小明"}));
    }

    #[tokio::test]
    async fn change_password_accepts_empty_response() {
        let h = harness();
        h.transport.respond(&url("/me/password"), 204, serde_json::Value::Null);

        h.client.change_my_password("old", "new").await.unwrap();

        let request = &h.transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(
            request.body,
            Some(json!({"old_password": "old", "new_password": "new"}))
        );
    }

    #[test]
    fn logout_removes_token() {
        let h = harness();
        h.store.set("token", "jwt-1").unwrap();

        h.client.logout().unwrap();
        assert_eq!(h.store.get("token").unwrap(), None);
    }
}
