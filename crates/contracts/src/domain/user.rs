use crate::shared::status::StatusTone;
use serde::{Deserialize, Serialize};

/// Account record from the admin view, `GET /admin/users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminUser {
    pub user_id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    pub role: String,
    #[serde(default)]
    pub province: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub avatar: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    pub total: u64,
    pub users: Vec<AdminUser>,
}

/// Body of `PATCH /admin/users/{id}/status`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateUserStatus {
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Customer,
    Photographer,
    Unknown,
}

impl UserRole {
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "customer" => UserRole::Customer,
            "photographer" => UserRole::Photographer,
            _ => UserRole::Unknown,
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            UserRole::Photographer => StatusTone::Info,
            UserRole::Customer => StatusTone::Success,
            UserRole::Unknown => StatusTone::Neutral,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            UserRole::Customer => Some("Khách hàng"),
            UserRole::Photographer => Some("Nhiếp ảnh gia"),
            UserRole::Unknown => None,
        }
    }
}

pub fn user_role_label(raw: &str) -> String {
    UserRole::parse(raw)
        .label()
        .map(str::to_string)
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_users_response() {
        let json = r#"{"total":1,"users":[
            {"user_id":4,"full_name":"Trần Văn An","email":"an@example.com",
             "phone_number":"0901234567","role":"photographer",
             "province":"Đà Nẵng","is_active":true,
             "created_at":"2025-01-15T08:00:00","slug":"tran-van-an",
             "avatar":""}]}"#;
        let r: UsersResponse = serde_json::from_str(json).unwrap();
        assert!(r.users[0].is_active);
        assert_eq!(UserRole::parse(&r.users[0].role), UserRole::Photographer);
    }

    #[test]
    fn role_fallback() {
        assert_eq!(UserRole::parse("admin"), UserRole::Unknown);
        assert_eq!(user_role_label("admin"), "admin");
        assert_eq!(user_role_label("customer"), "Khách hàng");
    }

    #[test]
    fn status_body_serializes_flat() {
        let body = serde_json::to_string(&UpdateUserStatus { is_active: false }).unwrap();
        assert_eq!(body, r#"{"is_active":false}"#);
    }
}
