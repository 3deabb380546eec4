//! Display formatting helpers (vi-VN conventions).
//!
//! All formatters are pure and total: malformed input comes back verbatim
//! instead of panicking, matching how the pages tolerate bad data.

/// Format an amount as Vietnamese đồng: dot-separated thousands, no
/// decimals, `₫` suffix. `1500000.0` -> `"1.500.000 ₫"`.
pub fn format_vnd(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();

    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        grouped.push('-');
    }
    let grouped: String = grouped.chars().rev().collect();

    format!("{} \u{20ab}", grouped)
}

/// `"2025-07-02T10:30:45.123Z"` -> `"02/07/2025 10:30"`.
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some(date) = reorder_date(date_part) {
            let hhmm: String = time_part.chars().take(5).collect();
            return format!("{} {}", date, hhmm);
        }
    }
    datetime_str.to_string()
}

/// Like [`format_datetime`] but keeps seconds (payment timestamps).
pub fn format_datetime_secs(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some(date) = reorder_date(date_part) {
            let time = time_part.split('.').next().unwrap_or(time_part);
            let time = time.trim_end_matches('Z');
            return format!("{} {}", date, time);
        }
    }
    datetime_str.to_string()
}

/// `"2025-07-02"` or a full timestamp -> `"02/07/2025"`.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    reorder_date(date_part).unwrap_or_else(|| date_str.to_string())
}

fn reorder_date(iso_date: &str) -> Option<String> {
    let (year, rest) = iso_date.split_once('-')?;
    let (month, day) = rest.split_once('-')?;
    Some(format!("{}/{}/{}", day, month, year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vnd_groups_thousands_with_dots() {
        assert_eq!(format_vnd(1_500_000.0), "1.500.000 \u{20ab}");
        assert_eq!(format_vnd(2_500_000.5), "2.500.001 \u{20ab}");
        assert_eq!(format_vnd(999.0), "999 \u{20ab}");
    }

    #[test]
    fn vnd_zero_is_not_blank() {
        assert_eq!(format_vnd(0.0), "0 \u{20ab}");
    }

    #[test]
    fn vnd_negative() {
        assert_eq!(format_vnd(-1_500_000.0), "-1.500.000 \u{20ab}");
    }

    #[test]
    fn datetime_vietnamese_order() {
        assert_eq!(format_datetime("2025-07-02T10:30:45.123Z"), "02/07/2025 10:30");
        assert_eq!(
            format_datetime_secs("2025-07-02T10:30:45.123Z"),
            "02/07/2025 10:30:45"
        );
        assert_eq!(format_date("2025-07-02T10:30:45Z"), "02/07/2025");
        assert_eq!(format_date("2025-12-31"), "31/12/2025");
    }

    #[test]
    fn invalid_input_returned_verbatim() {
        assert_eq!(format_datetime("not a date"), "not a date");
        assert_eq!(format_date(""), "");
        assert_eq!(format_datetime_secs("2025"), "2025");
    }
}
