//! 管理端用户操作

use super::{payload, ApiClient};
use crate::error::GatewayResult;
use crate::gateway::RequestOptions;
use crate::models::{AdminUserDetail, AdminUserUpdate};
use serde_json::json;

impl ApiClient {
    pub async fn admin_get_user_detail(&self, uid: i64) -> GatewayResult<AdminUserDetail> {
        self.gateway
            .send(&format!("/admin/users/{}", uid), RequestOptions::get())
            .await
    }

    /// 修改用户资料或状态
    pub async fn admin_update_user(&self, uid: i64, update: &AdminUserUpdate) -> GatewayResult<()> {
        let path = format!("/admin/users/{}", uid);
        let data = payload(&path, update)?;
        self.send_unit(&path, RequestOptions::put(data)).await
    }

    /// 重置用户密码
    pub async fn admin_reset_user_password(&self, uid: i64, password: &str) -> GatewayResult<()> {
        self.send_unit(
            &format!("/admin/users/{}/password", uid),
            RequestOptions::put(json!({"password": password})),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{harness, url};
    use crate::models::AdminUserUpdate;
    use serde_json::json;

    #[tokio::test]
    async fn detail_decodes_role_list() {
        let h = harness();
        h.transport.respond(
            &url("/admin/users/5"),
            200,
            json!({
                "id": 5,
                "account": "teacher01",
                "status": "ACTIVE",
                "roles": [{"code": "TEACHER", "name": "教师"}, {"code": "USER"}]
            }),
        );

        let detail = h.client.admin_get_user_detail(5).await.unwrap();
        assert_eq!(detail.roles.len(), 2);
        assert_eq!(detail.roles[1].name, None);
    }

    #[tokio::test]
    async fn clearing_email_sends_explicit_null() {
        let h = harness();
        h.transport.respond(&url("/admin/users/5"), 200, json!({"message": "ok"}));

        let update = AdminUserUpdate {
            email: Some(None),
            status: Some("DISABLED".into()),
            ..AdminUserUpdate::default()
        };
        h.client.admin_update_user(5, &update).await.unwrap();

        assert_eq!(
            h.transport.requests()[0].body,
            Some(json!({"email": null, "status": "DISABLED"}))
        );
    }

    #[tokio::test]
    async fn forbidden_reset_surfaces_server_message() {
        let h = harness();
        h.transport.respond(
            &url("/admin/users/5/password"),
            403,
            json!({"code": 403, "message": "需要管理员权限", "data": null}),
        );

        let err = h.client.admin_reset_user_password(5, "new-pass").await.unwrap_err();
        assert_eq!(err.user_message(), "需要管理员权限");
        assert!(h.navigator.redirects().is_empty());
    }
}
