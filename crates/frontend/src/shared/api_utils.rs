//! Helpers for talking to the SnapLink REST backend.

use super::auth;

/// Base URL for API requests, derived from the current window location.
/// Returns an empty string when no window is available (tests).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}/api", protocol, hostname)
}

/// Full URL for an API path such as `/admin/bookings`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `Authorization` header value, or an error message for unauthenticated
/// sessions. Token issuance itself is handled by the identity provider.
pub fn bearer_header() -> Result<String, String> {
    auth::get_access_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or_else(|| "Chưa đăng nhập".to_string())
}
