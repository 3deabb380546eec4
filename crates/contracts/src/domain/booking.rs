use crate::shared::status::StatusTone;
use serde::{Deserialize, Serialize};

/// A confirmed photography session as returned by `GET /admin/bookings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: i64,
    pub customer_id: i64,
    pub photographer_id: i64,
    pub service_id: i64,
    pub booking_date: String,
    #[serde(default)]
    pub location_id: i64,
    #[serde(default)]
    pub custom_location: Option<String>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub shooting_type: String,
    pub status: String,
    pub created_at: String,
    #[serde(default)]
    pub concept: String,
    #[serde(default)]
    pub illustration_url: Option<String>,
    pub booking_code: String,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub discount_code: Option<String>,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub payment_status: Option<String>,
}

impl Booking {
    /// Location shown in lists: the free-text location when present,
    /// otherwise the province.
    pub fn display_location(&self) -> &str {
        match self.custom_location.as_deref() {
            Some(loc) if !loc.trim().is_empty() => loc,
            _ => &self.province,
        }
    }
}

/// The bookings endpoint historically returned either a bare array or a
/// `{ "data": [...] }` wrapper depending on backend version. Accept both.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BookingsEnvelope {
    Wrapped { data: Vec<Booking> },
    Bare(Vec<Booking>),
}

impl BookingsEnvelope {
    pub fn into_items(self) -> Vec<Booking> {
        match self {
            BookingsEnvelope::Wrapped { data } => data,
            BookingsEnvelope::Bare(items) => items,
        }
    }
}

/// Pre-aggregated count per booking status from `GET /admin/distribution/booking`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingDistribution {
    #[serde(default)]
    pub confirm: u64,
    #[serde(default)]
    pub completed: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub cancelled: u64,
    #[serde(default)]
    pub accepted: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Accepted,
    Unknown,
}

impl BookingStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "pending" => BookingStatus::Pending,
            "confirmed" => BookingStatus::Confirmed,
            "completed" => BookingStatus::Completed,
            "cancelled" => BookingStatus::Cancelled,
            "accepted" => BookingStatus::Accepted,
            _ => BookingStatus::Unknown,
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            BookingStatus::Confirmed | BookingStatus::Accepted => StatusTone::Success,
            BookingStatus::Pending => StatusTone::Warning,
            BookingStatus::Cancelled => StatusTone::Danger,
            BookingStatus::Completed => StatusTone::Info,
            BookingStatus::Unknown => StatusTone::Neutral,
        }
    }

    /// Display label; callers fall back to the raw wire value for `Unknown`.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            BookingStatus::Pending => Some("Chờ xác nhận"),
            BookingStatus::Confirmed => Some("Đã xác nhận"),
            BookingStatus::Completed => Some("Hoàn thành"),
            BookingStatus::Cancelled => Some("Đã hủy"),
            BookingStatus::Accepted => Some("Đã nhận"),
            BookingStatus::Unknown => None,
        }
    }
}

/// Label for a raw status string, falling back to the string itself.
pub fn booking_status_label(raw: &str) -> String {
    BookingStatus::parse(raw)
        .label()
        .map(str::to_string)
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_accepts_both_shapes() {
        let bare = r#"[{"booking_id":1,"customer_id":2,"photographer_id":3,
            "service_id":4,"booking_date":"2025-06-01T09:00:00",
            "status":"pending","created_at":"2025-05-20T10:00:00",
            "booking_code":"BK001"}]"#;
        let wrapped = format!(r#"{{"data":{}}}"#, bare);

        let a: BookingsEnvelope = serde_json::from_str(bare).unwrap();
        let b: BookingsEnvelope = serde_json::from_str(&wrapped).unwrap();
        assert_eq!(a.into_items().len(), 1);
        assert_eq!(b.into_items()[0].booking_code, "BK001");
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"booking_id":9,"customer_id":1,"photographer_id":1,
            "service_id":1,"booking_date":"2025-06-01T09:00:00",
            "status":"confirmed","created_at":"2025-05-20T10:00:00",
            "booking_code":"BK009"}"#;
        let b: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(b.total_price, 0.0);
        assert!(b.payment_status.is_none());
        assert_eq!(b.display_location(), "");
    }

    #[test]
    fn status_parse_is_case_insensitive_with_fallback() {
        assert_eq!(BookingStatus::parse("Confirmed"), BookingStatus::Confirmed);
        assert_eq!(BookingStatus::parse("on_hold"), BookingStatus::Unknown);
        assert_eq!(BookingStatus::parse("on_hold").tone(), StatusTone::Neutral);
        assert_eq!(booking_status_label("on_hold"), "on_hold");
        assert_eq!(booking_status_label("completed"), "Hoàn thành");
    }

    #[test]
    fn display_location_prefers_custom() {
        let json = r#"{"booking_id":9,"customer_id":1,"photographer_id":1,
            "service_id":1,"booking_date":"2025-06-01T09:00:00",
            "status":"confirmed","created_at":"2025-05-20T10:00:00",
            "booking_code":"BK009","custom_location":"Hồ Tây",
            "province":"Hà Nội"}"#;
        let b: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(b.display_location(), "Hồ Tây");
    }
}
