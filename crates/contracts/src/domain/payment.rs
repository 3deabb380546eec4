use crate::shared::status::StatusTone;
use serde::{Deserialize, Serialize};

/// A monetary transaction tied to a booking, `GET /admin/payments`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: String,
    pub booking_code: String,
    #[serde(default)]
    pub order_code: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub payment_type: String,
    pub status: String,
    pub user_id: i64,
    pub paid_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentHistoryResponse {
    pub total: u64,
    pub payments: Vec<Payment>,
}

/// Wire values are upper-case (`PAID`, `PENDING`, ...); parse is
/// case-insensitive anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
    Cancelled,
    Unknown,
}

impl PaymentStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "PAID" => PaymentStatus::Paid,
            "PENDING" => PaymentStatus::Pending,
            "FAILED" => PaymentStatus::Failed,
            "CANCELLED" => PaymentStatus::Cancelled,
            _ => PaymentStatus::Unknown,
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            PaymentStatus::Paid => StatusTone::Success,
            PaymentStatus::Pending => StatusTone::Warning,
            PaymentStatus::Failed => StatusTone::Danger,
            PaymentStatus::Cancelled => StatusTone::Neutral,
            PaymentStatus::Unknown => StatusTone::Info,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            PaymentStatus::Paid => Some("Đã thanh toán"),
            PaymentStatus::Pending => Some("Chờ thanh toán"),
            PaymentStatus::Failed => Some("Thất bại"),
            PaymentStatus::Cancelled => Some("Đã hủy"),
            PaymentStatus::Unknown => None,
        }
    }
}

pub fn payment_status_label(raw: &str) -> String {
    PaymentStatus::parse(raw)
        .label()
        .map(str::to_string)
        .unwrap_or_else(|| raw.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentType {
    Full,
    Deposit,
    Unknown,
}

impl PaymentType {
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "full" => PaymentType::Full,
            "deposit" => PaymentType::Deposit,
            _ => PaymentType::Unknown,
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            PaymentType::Full => StatusTone::Info,
            PaymentType::Deposit => StatusTone::Warning,
            PaymentType::Unknown => StatusTone::Neutral,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            PaymentType::Full => Some("Thanh toán đủ"),
            PaymentType::Deposit => Some("Đặt cọc"),
            PaymentType::Unknown => None,
        }
    }
}

pub fn payment_type_label(raw: &str) -> String {
    PaymentType::parse(raw)
        .label()
        .map(str::to_string)
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_history_response() {
        let json = r#"{"total":2,"payments":[
            {"payment_id":"pay_01","booking_code":"BK001","order_code":"OD1",
             "amount":1500000,"payment_type":"deposit","status":"PAID",
             "user_id":4,"paid_at":"2025-07-02T10:30:00"},
            {"payment_id":"pay_02","booking_code":"BK002","status":"FAILED",
             "user_id":5,"paid_at":"2025-07-03T11:00:00"}]}"#;
        let r: PaymentHistoryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.total, 2);
        // amount missing on the second record coerces to 0
        assert_eq!(r.payments[1].amount, 0.0);
    }

    #[test]
    fn status_and_type_fallbacks() {
        assert_eq!(PaymentStatus::parse("paid"), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::parse("REFUNDED"), PaymentStatus::Unknown);
        assert_eq!(PaymentType::parse("FULL"), PaymentType::Full);
        assert_eq!(payment_type_label("installment"), "installment");
        assert_eq!(payment_type_label("deposit"), "Đặt cọc");
    }

    #[test]
    fn unknown_status_keeps_the_informational_tone() {
        // Unrecognized payment statuses render blue, not gray.
        assert_eq!(PaymentStatus::parse("REFUNDED").tone(), StatusTone::Info);
    }
}
