use serde::{Deserialize, Serialize};

/// 登录凭证
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub account: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub last_login_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersPage {
    pub total: u64,
    pub items: Vec<User>,
}

/// 用户资料的部分更新，未设置的字段不会发送
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSimple {
    pub id: i64,
    pub account: String,
    pub status: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersSimplePage {
    pub total: u64,
    pub items: Vec<UserSimple>,
}

/// 当前登录用户信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub account: String,
    pub status: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub role_codes: Vec<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub last_login_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// 管理端看到的用户详情
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUserDetail {
    pub id: i64,
    pub account: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub roles: Vec<RoleRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub last_login_at: Option<String>,
}

/// 管理端更新用户
///
/// `email` 为 `Some(None)` 时发送 `null` 以清空邮箱。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdminUserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_info_tolerates_missing_optional_fields() {
        let info: UserInfo = serde_json::from_value(json!({
            "id": 1,
            "account": "admin",
            "status": "ACTIVE",
            "roles": ["管理员"],
            "role_codes": ["ADMIN"],
            "is_admin": true
        }))
        .unwrap();
        assert!(info.is_admin);
        assert_eq!(info.nickname, None);
    }

    #[test]
    fn patches_only_send_set_fields() {
        let patch = UserPatch {
            nickname: Some("小明".into()),
            ..UserPatch::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"nickname": "小明"}));

        let update = AdminUserUpdate {
            email: Some(None),
            ..AdminUserUpdate::default()
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"email": null}));
    }

    #[test]
    fn token_type_defaults_to_bearer() {
        let token: Token = serde_json::from_value(json!({"access_token": "abc"})).unwrap();
        assert_eq!(token.token_type, "bearer");
    }
}
