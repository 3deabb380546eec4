use crate::shared::status::StatusTone;
use serde::{Deserialize, Serialize};

/// A photographer's response to a customer request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    #[serde(default)]
    pub offer_id: i64,
    pub photographer_id: i64,
    #[serde(default)]
    pub custom_price: f64,
    #[serde(default)]
    pub message: String,
    pub status: String,
}

/// A customer-initiated solicitation for offers, `GET /admin/requests`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhotoRequest {
    pub request_id: i64,
    pub user_id: i64,
    pub request_date: String,
    #[serde(default)]
    pub concept: String,
    #[serde(default)]
    pub estimated_budget: f64,
    #[serde(default)]
    pub shooting_type: String,
    #[serde(default)]
    pub illustration_url: Option<String>,
    #[serde(default)]
    pub location_text: Option<String>,
    #[serde(default)]
    pub province: String,
    pub status: String,
    pub created_at: String,
    pub request_code: String,
    #[serde(default)]
    pub offers: Vec<Offer>,
}

impl PhotoRequest {
    pub fn display_location(&self) -> &str {
        match self.location_text.as_deref() {
            Some(loc) if !loc.trim().is_empty() => loc,
            _ => &self.province,
        }
    }
}

/// Same tolerance as bookings: bare array or `{ "data": [...] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RequestsEnvelope {
    Wrapped { data: Vec<PhotoRequest> },
    Bare(Vec<PhotoRequest>),
}

impl RequestsEnvelope {
    pub fn into_items(self) -> Vec<PhotoRequest> {
        match self {
            RequestsEnvelope::Wrapped { data } => data,
            RequestsEnvelope::Bare(items) => items,
        }
    }
}

/// Pre-aggregated count per request status from `GET /admin/distribution/request`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestDistribution {
    #[serde(default)]
    pub open: u64,
    #[serde(default)]
    pub matched: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Open,
    Matched,
    Accepted,
    Rejected,
    Pending,
    Completed,
    Unknown,
}

impl RequestStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "open" => RequestStatus::Open,
            "matched" => RequestStatus::Matched,
            "accepted" => RequestStatus::Accepted,
            "rejected" => RequestStatus::Rejected,
            "pending" => RequestStatus::Pending,
            "completed" => RequestStatus::Completed,
            _ => RequestStatus::Unknown,
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            RequestStatus::Accepted | RequestStatus::Matched => StatusTone::Success,
            RequestStatus::Pending | RequestStatus::Open => StatusTone::Warning,
            RequestStatus::Rejected => StatusTone::Danger,
            RequestStatus::Completed => StatusTone::Info,
            RequestStatus::Unknown => StatusTone::Neutral,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            RequestStatus::Open => Some("Đang mở"),
            RequestStatus::Matched => Some("Đã ghép"),
            RequestStatus::Accepted => Some("Đã nhận"),
            RequestStatus::Rejected => Some("Từ chối"),
            RequestStatus::Pending => Some("Chờ xử lý"),
            RequestStatus::Completed => Some("Hoàn thành"),
            RequestStatus::Unknown => None,
        }
    }
}

pub fn request_status_label(raw: &str) -> String {
    RequestStatus::parse(raw)
        .label()
        .map(str::to_string)
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_request_with_offers() {
        let json = r#"{"request_id":5,"user_id":7,
            "request_date":"2025-07-01T08:00:00","concept":"Ảnh cưới",
            "estimated_budget":2500000,"status":"open",
            "created_at":"2025-06-25T12:00:00","request_code":"RQ005",
            "offers":[{"photographer_id":3,"custom_price":2000000,
                       "message":"Nhận chụp trọn gói","status":"pending"}]}"#;
        let r: PhotoRequest = serde_json::from_str(json).unwrap();
        assert_eq!(r.offers.len(), 1);
        assert_eq!(r.offers[0].custom_price, 2_000_000.0);
        assert_eq!(r.display_location(), "");
    }

    #[test]
    fn distribution_missing_counts_default_to_zero() {
        let d: RequestDistribution = serde_json::from_str(r#"{"open":4}"#).unwrap();
        assert_eq!(d.open, 4);
        assert_eq!(d.matched, 0);
    }

    #[test]
    fn status_fallback() {
        assert_eq!(RequestStatus::parse("MATCHED"), RequestStatus::Matched);
        assert_eq!(RequestStatus::parse("archived"), RequestStatus::Unknown);
        assert_eq!(request_status_label("archived"), "archived");
    }
}
