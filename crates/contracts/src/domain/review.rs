use crate::shared::status::StatusTone;
use serde::{Deserialize, Serialize};

/// A customer's rating and comment on a completed booking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Review {
    pub review_id: i64,
    pub booking_id: i64,
    pub customer_id: i64,
    pub photographer_id: i64,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    pub created_at: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_avatar: Option<String>,
}

impl Review {
    /// Name shown in lists; anonymous reviews fall back to a generic label.
    pub fn display_name(&self) -> &str {
        match self.customer_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => "Khách hàng",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewsResponse {
    pub total: u64,
    pub reviews: Vec<Review>,
}

/// Badge tone for a 1-5 star rating; out-of-range ratings are neutral.
pub fn rating_tone(rating: u8) -> StatusTone {
    match rating {
        5 => StatusTone::Success,
        4 => StatusTone::Info,
        3 => StatusTone::Warning,
        1 | 2 => StatusTone::Danger,
        _ => StatusTone::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reviews_response() {
        let json = r#"{"total":1,"reviews":[
            {"review_id":11,"booking_id":1,"customer_id":2,
             "photographer_id":3,"rating":5,"comment":"Ảnh đẹp lắm!",
             "created_at":"2025-07-10T09:00:00","customer_name":null,
             "customer_avatar":null}]}"#;
        let r: ReviewsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.reviews[0].display_name(), "Khách hàng");
        assert_eq!(rating_tone(r.reviews[0].rating), StatusTone::Success);
    }

    #[test]
    fn rating_tone_bounds() {
        assert_eq!(rating_tone(1), StatusTone::Danger);
        assert_eq!(rating_tone(0), StatusTone::Neutral);
        assert_eq!(rating_tone(9), StatusTone::Neutral);
    }
}
