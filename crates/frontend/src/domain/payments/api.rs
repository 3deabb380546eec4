use crate::shared::api_utils::{api_url, bearer_header};
use contracts::domain::payment::PaymentHistoryResponse;
use gloo_net::http::Request;

pub async fn fetch_payments() -> Result<PaymentHistoryResponse, String> {
    let auth = bearer_header()?;
    let response = Request::get(&api_url("/admin/payments"))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Lỗi mạng: {}", e))?;

    if !response.ok() {
        return Err(format!("Lỗi máy chủ: {}", response.status()));
    }

    response
        .json::<PaymentHistoryResponse>()
        .await
        .map_err(|e| format!("Dữ liệu không hợp lệ: {}", e))
}
