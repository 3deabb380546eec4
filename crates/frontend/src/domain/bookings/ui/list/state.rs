use crate::shared::list_utils::{apply_search, contains_term, matches_choice, Searchable, ALL};
use contracts::domain::booking::Booking;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct BookingsListState {
    pub items: Vec<Booking>,
    pub search_query: String,
    pub status_filter: String,
    pub is_loaded: bool,
}

impl Default for BookingsListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            status_filter: ALL.to_string(),
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<BookingsListState> {
    RwSignal::new(BookingsListState::default())
}

impl Searchable for Booking {
    fn matches_search(&self, term: &str) -> bool {
        contains_term(&self.booking_code, term)
            || contains_term(&self.concept, term)
            || contains_term(&self.province, term)
    }
}

/// Visible subset under the current search term and status filter.
pub fn visible(items: &[Booking], search: &str, status: &str) -> Vec<Booking> {
    apply_search(items, search)
        .into_iter()
        .filter(|b| matches_choice(status, &b.status))
        .collect()
}

/// Distinct status values in first-seen order, for the filter dropdown.
pub fn unique_statuses(items: &[Booking]) -> Vec<String> {
    let mut seen = Vec::new();
    for item in items {
        if !seen.contains(&item.status) {
            seen.push(item.status.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(code: &str, concept: &str, province: &str, status: &str) -> Booking {
        Booking {
            booking_code: code.to_string(),
            concept: concept.to_string(),
            province: province.to_string(),
            status: status.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn search_covers_code_concept_and_province() {
        let items = vec![
            booking("BK100", "Chụp cưới", "Hà Nội", "pending"),
            booking("BK200", "Kỷ yếu", "Huế", "completed"),
        ];

        assert_eq!(visible(&items, "bk1", ALL).len(), 1);
        assert_eq!(visible(&items, "kỷ yếu", ALL).len(), 1);
        assert_eq!(visible(&items, "huế", ALL).len(), 1);
        assert!(visible(&items, "đà nẵng", ALL).is_empty());
    }

    #[test]
    fn status_filter_combines_with_search() {
        let items = vec![
            booking("BK1", "Concept A", "Hà Nội", "completed"),
            booking("BK2", "Concept B", "Hà Nội", "pending"),
            booking("BK3", "Concept C", "Huế", "completed"),
        ];

        let out = visible(&items, "hà nội", "completed");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].booking_code, "BK1");
    }

    #[test]
    fn unique_statuses_keep_first_seen_order() {
        let items = vec![
            booking("BK1", "", "", "pending"),
            booking("BK2", "", "", "completed"),
            booking("BK3", "", "", "pending"),
        ];
        assert_eq!(unique_statuses(&items), vec!["pending", "completed"]);
    }
}
