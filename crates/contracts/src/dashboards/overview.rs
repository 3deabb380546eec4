use serde::{Deserialize, Serialize};

/// Pre-aggregated totals for one calendar month. The backend computes these;
/// the client only formats them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthTotals {
    #[serde(default)]
    pub total_bookings: f64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_requests: f64,
    #[serde(default)]
    pub total_users: f64,
    #[serde(default)]
    pub total_photographers: f64,
    #[serde(default)]
    pub total_reviews: f64,
    #[serde(default)]
    pub total_posts: f64,
}

/// Response of `GET /admin/monthly-comparison`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonthlyComparison {
    #[serde(default)]
    pub current_month: MonthTotals,
    #[serde(default)]
    pub previous_month: MonthTotals,
}

/// One row of the revenue series, `GET /admin/dashboard/revenue`.
#[derive(Debug, Clone, Deserialize)]
pub struct RevenuePoint {
    pub name: String,
    #[serde(rename = "Doanh_thu", default)]
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RevenueDataResponse {
    #[serde(default)]
    pub revenue_data: Vec<RevenuePoint>,
}

/// Aggregation window for the revenue series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeframe {
    Week,
    Month,
    Year,
}

impl Timeframe {
    /// Query-string value expected by the backend.
    pub fn as_param(&self) -> &'static str {
        match self {
            Timeframe::Week => "week",
            Timeframe::Month => "month",
            Timeframe::Year => "year",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "week" => Timeframe::Week,
            "year" => Timeframe::Year,
            _ => Timeframe::Month,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Week => "Theo tuần",
            Timeframe::Month => "Theo tháng",
            Timeframe::Year => "Theo năm",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comparison_with_missing_blocks() {
        let r: MonthlyComparison = serde_json::from_str(
            r#"{"current_month":{"total_users":120,"total_revenue":5500000}}"#,
        )
        .unwrap();
        assert_eq!(r.current_month.total_users, 120.0);
        assert_eq!(r.previous_month.total_users, 0.0);
    }

    #[test]
    fn parses_revenue_series_wire_name() {
        let r: RevenueDataResponse = serde_json::from_str(
            r#"{"revenue_data":[{"name":"T7","Doanh_thu":1200000}]}"#,
        )
        .unwrap();
        assert_eq!(r.revenue_data[0].revenue, 1_200_000.0);
    }

    #[test]
    fn timeframe_round_trip() {
        assert_eq!(Timeframe::parse("week"), Timeframe::Week);
        assert_eq!(Timeframe::parse("anything"), Timeframe::Month);
        assert_eq!(Timeframe::Year.as_param(), "year");
    }
}
