use crate::shared::api_utils::{api_url, bearer_header};
use contracts::dashboards::overview::{MonthlyComparison, RevenueDataResponse, Timeframe};
use contracts::domain::booking::BookingDistribution;
use contracts::domain::request::RequestDistribution;
use gloo_net::http::Request;

pub async fn fetch_monthly_comparison() -> Result<MonthlyComparison, String> {
    let auth = bearer_header()?;
    let response = Request::get(&api_url("/admin/monthly-comparison"))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Lỗi mạng: {}", e))?;

    if !response.ok() {
        return Err(format!("Lỗi máy chủ: {}", response.status()));
    }

    response
        .json::<MonthlyComparison>()
        .await
        .map_err(|e| format!("Dữ liệu không hợp lệ: {}", e))
}

pub async fn fetch_revenue(timeframe: Timeframe) -> Result<RevenueDataResponse, String> {
    let auth = bearer_header()?;
    let url = api_url(&format!(
        "/admin/dashboard/revenue?timeframe={}",
        timeframe.as_param()
    ));
    let response = Request::get(&url)
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Lỗi mạng: {}", e))?;

    if !response.ok() {
        return Err(format!("Lỗi máy chủ: {}", response.status()));
    }

    response
        .json::<RevenueDataResponse>()
        .await
        .map_err(|e| format!("Dữ liệu không hợp lệ: {}", e))
}

pub async fn fetch_booking_distribution() -> Result<BookingDistribution, String> {
    let auth = bearer_header()?;
    let response = Request::get(&api_url("/admin/distribution/booking"))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Lỗi mạng: {}", e))?;

    if !response.ok() {
        return Err(format!("Lỗi máy chủ: {}", response.status()));
    }

    response
        .json::<BookingDistribution>()
        .await
        .map_err(|e| format!("Dữ liệu không hợp lệ: {}", e))
}

pub async fn fetch_request_distribution() -> Result<RequestDistribution, String> {
    let auth = bearer_header()?;
    let response = Request::get(&api_url("/admin/distribution/request"))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Lỗi mạng: {}", e))?;

    if !response.ok() {
        return Err(format!("Lỗi máy chủ: {}", response.status()));
    }

    response
        .json::<RequestDistribution>()
        .await
        .map_err(|e| format!("Dữ liệu không hợp lệ: {}", e))
}
