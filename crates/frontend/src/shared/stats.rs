//! Summary arithmetic for the stat cards above each list.
//!
//! All helpers operate on the already-filtered collection and tolerate
//! missing data by treating it as zero.

/// Sum a numeric field over the items matching `pred`.
pub fn sum_where<T, P, F>(items: &[T], pred: P, field: F) -> f64
where
    P: Fn(&T) -> bool,
    F: Fn(&T) -> f64,
{
    items.iter().filter(|i| pred(i)).map(|i| field(i)).sum()
}

/// Share of `matched` in `total` as a rounded whole percent.
/// Zero total means zero percent, never a division by zero.
pub fn percentage(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (matched as f64 / total as f64 * 100.0).round() as u32
}

/// Arithmetic mean rounded to one decimal place; empty input yields 0.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Month-over-month growth in percent.
///
/// A zero previous period reports 0 rather than an undefined/infinite
/// growth — the dashboard has always displayed it that way.
pub fn growth_rate(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tx {
        amount: f64,
        paid: bool,
    }

    #[test]
    fn sum_where_filters_and_sums() {
        let txs = vec![
            Tx { amount: 1_500_000.0, paid: true },
            Tx { amount: 800_000.0, paid: false },
            Tx { amount: 700_000.0, paid: true },
        ];
        let paid = sum_where(&txs, |t| t.paid, |t| t.amount);
        assert_eq!(paid, 2_200_000.0);
    }

    #[test]
    fn sum_where_empty_is_zero() {
        let txs: Vec<Tx> = Vec::new();
        assert_eq!(sum_where(&txs, |_| true, |t| t.amount), 0.0);
    }

    #[test]
    fn percentage_guards_zero_total() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(3, 4), 75);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
    }

    #[test]
    fn average_one_decimal() {
        assert_eq!(average(&[]), 0.0);
        assert_eq!(average(&[5.0, 4.0, 4.0]), 4.3);
        assert_eq!(average(&[5.0]), 5.0);
    }

    #[test]
    fn growth_rate_zero_previous_is_zero() {
        assert_eq!(growth_rate(42.0, 0.0), 0.0);
        assert_eq!(growth_rate(0.0, 0.0), 0.0);
        assert_eq!(growth_rate(110.0, 100.0), 10.0);
        assert_eq!(growth_rate(90.0, 100.0), -10.0);
    }
}
