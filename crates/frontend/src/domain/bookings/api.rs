use crate::shared::api_utils::{api_url, bearer_header};
use contracts::domain::booking::{Booking, BookingsEnvelope};
use gloo_net::http::Request;

pub async fn fetch_bookings() -> Result<Vec<Booking>, String> {
    let auth = bearer_header()?;
    let response = Request::get(&api_url("/admin/bookings"))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Lỗi mạng: {}", e))?;

    if !response.ok() {
        return Err(format!("Lỗi máy chủ: {}", response.status()));
    }

    let envelope = response
        .json::<BookingsEnvelope>()
        .await
        .map_err(|e| format!("Dữ liệu không hợp lệ: {}", e))?;
    Ok(envelope.into_items())
}
