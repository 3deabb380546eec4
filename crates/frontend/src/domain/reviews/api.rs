use crate::shared::api_utils::{api_url, bearer_header};
use contracts::domain::review::ReviewsResponse;
use gloo_net::http::Request;

pub async fn fetch_reviews() -> Result<ReviewsResponse, String> {
    let auth = bearer_header()?;
    let response = Request::get(&api_url("/admin/reviews"))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Lỗi mạng: {}", e))?;

    if !response.ok() {
        return Err(format!("Lỗi máy chủ: {}", response.status()));
    }

    response
        .json::<ReviewsResponse>()
        .await
        .map_err(|e| format!("Dữ liệu không hợp lệ: {}", e))
}

/// Deleting an already-deleted review is the backend's concern; the call is
/// not retried client-side.
pub async fn delete_review(review_id: i64) -> Result<(), String> {
    let auth = bearer_header()?;
    let response = Request::delete(&api_url(&format!("/admin/reviews/{}", review_id)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Lỗi mạng: {}", e))?;

    if !response.ok() {
        return Err(format!("Lỗi máy chủ: {}", response.status()));
    }
    Ok(())
}
