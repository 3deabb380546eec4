use crate::shared::api_utils::{api_url, bearer_header};
use crate::shared::list_utils::ALL;
use contracts::domain::user::{UpdateUserStatus, UsersResponse};
use gloo_net::http::Request;

/// The users endpoint pages server-side; the role filter is also applied
/// by the backend so the page requests only what it shows.
pub async fn fetch_users(page: u32, limit: u32, role: &str) -> Result<UsersResponse, String> {
    let auth = bearer_header()?;
    let mut url = api_url(&format!("/admin/users?page={}&limit={}", page, limit));
    if role != ALL {
        url.push_str(&format!("&role={}", role));
    }

    let response = Request::get(&url)
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Lỗi mạng: {}", e))?;

    if !response.ok() {
        return Err(format!("Lỗi máy chủ: {}", response.status()));
    }

    response
        .json::<UsersResponse>()
        .await
        .map_err(|e| format!("Dữ liệu không hợp lệ: {}", e))
}

pub async fn update_user_status(user_id: i64, is_active: bool) -> Result<(), String> {
    let auth = bearer_header()?;
    let body = serde_json::to_string(&UpdateUserStatus { is_active })
        .map_err(|e| format!("Lỗi mã hóa dữ liệu: {}", e))?;

    let response = Request::patch(&api_url(&format!("/admin/users/{}/status", user_id)))
        .header("Authorization", &auth)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| format!("Lỗi mạng: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Lỗi mạng: {}", e))?;

    if !response.ok() {
        return Err(format!("Lỗi máy chủ: {}", response.status()));
    }
    Ok(())
}
