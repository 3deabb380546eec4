use crate::shared::list_utils::{apply_search, contains_term, matches_choice, Searchable, ALL};
use crate::shared::stats::{percentage, sum_where};
use contracts::domain::payment::{Payment, PaymentStatus};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct PaymentsListState {
    pub items: Vec<Payment>,
    pub search_query: String,
    pub status_filter: String,
    pub type_filter: String,
    pub is_loaded: bool,
}

impl Default for PaymentsListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            status_filter: ALL.to_string(),
            type_filter: ALL.to_string(),
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<PaymentsListState> {
    RwSignal::new(PaymentsListState::default())
}

impl Searchable for Payment {
    fn matches_search(&self, term: &str) -> bool {
        contains_term(&self.booking_code, term)
            || contains_term(&self.order_code, term)
            || contains_term(&self.payment_id, term)
    }
}

pub fn visible(items: &[Payment], search: &str, status: &str, ptype: &str) -> Vec<Payment> {
    apply_search(items, search)
        .into_iter()
        .filter(|p| matches_choice(status, &p.status))
        .filter(|p| matches_choice(ptype, &p.payment_type))
        .collect()
}

pub fn unique_statuses(items: &[Payment]) -> Vec<String> {
    let mut seen = Vec::new();
    for item in items {
        if !seen.contains(&item.status) {
            seen.push(item.status.clone());
        }
    }
    seen
}

pub fn unique_types(items: &[Payment]) -> Vec<String> {
    let mut seen = Vec::new();
    for item in items {
        if !seen.contains(&item.payment_type) {
            seen.push(item.payment_type.clone());
        }
    }
    seen
}

fn is_paid(p: &Payment) -> bool {
    PaymentStatus::parse(&p.status) == PaymentStatus::Paid
}

/// Sum of amounts over PAID transactions in the visible subset.
pub fn paid_total(items: &[Payment]) -> f64 {
    sum_where(items, is_paid, |p| p.amount)
}

/// Share of PAID transactions in the visible subset, whole percent.
pub fn paid_percentage(items: &[Payment]) -> u32 {
    let paid = items.iter().filter(|p| is_paid(p)).count();
    percentage(paid, items.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(id: &str, booking: &str, amount: f64, status: &str, ptype: &str) -> Payment {
        Payment {
            payment_id: id.to_string(),
            booking_code: booking.to_string(),
            amount,
            status: status.to_string(),
            payment_type: ptype.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn both_categorical_filters_combine() {
        let items = vec![
            payment("p1", "BK1", 100.0, "PAID", "deposit"),
            payment("p2", "BK2", 200.0, "PAID", "full"),
            payment("p3", "BK3", 300.0, "PENDING", "deposit"),
        ];
        let out = visible(&items, "", "PAID", "deposit");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].payment_id, "p1");
    }

    #[test]
    fn paid_total_ignores_unpaid() {
        let items = vec![
            payment("p1", "BK1", 1_500_000.0, "PAID", "full"),
            payment("p2", "BK2", 2_000_000.0, "FAILED", "full"),
            payment("p3", "BK3", 500_000.0, "paid", "deposit"),
        ];
        assert_eq!(paid_total(&items), 2_000_000.0);
    }

    #[test]
    fn paid_percentage_handles_empty() {
        assert_eq!(paid_percentage(&[]), 0);
        let items = vec![
            payment("p1", "BK1", 1.0, "PAID", "full"),
            payment("p2", "BK2", 1.0, "PAID", "full"),
            payment("p3", "BK3", 1.0, "PENDING", "full"),
            payment("p4", "BK4", 1.0, "FAILED", "full"),
        ];
        assert_eq!(paid_percentage(&items), 50);
    }
}
