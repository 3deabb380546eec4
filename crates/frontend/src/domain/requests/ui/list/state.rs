use crate::shared::list_utils::{apply_search, contains_term, matches_choice, Searchable, ALL};
use contracts::domain::request::PhotoRequest;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct RequestsListState {
    pub items: Vec<PhotoRequest>,
    pub search_query: String,
    pub status_filter: String,
    pub is_loaded: bool,
}

impl Default for RequestsListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            status_filter: ALL.to_string(),
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<RequestsListState> {
    RwSignal::new(RequestsListState::default())
}

impl Searchable for PhotoRequest {
    fn matches_search(&self, term: &str) -> bool {
        contains_term(&self.request_code, term)
            || contains_term(&self.concept, term)
            || contains_term(&self.province, term)
    }
}

pub fn visible(items: &[PhotoRequest], search: &str, status: &str) -> Vec<PhotoRequest> {
    apply_search(items, search)
        .into_iter()
        .filter(|r| matches_choice(status, &r.status))
        .collect()
}

pub fn unique_statuses(items: &[PhotoRequest]) -> Vec<String> {
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

    fn request(code: &str, concept: &str, status: &str) -> PhotoRequest {
        PhotoRequest {
            request_code: code.to_string(),
            concept: concept.to_string(),
            status: status.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn no_op_filters_return_everything() {
        let items = vec![
            request("RQ1", "Chụp gia đình", "open"),
            request("RQ2", "Kỷ yếu", "matched"),
        ];
        let out = visible(&items, "", ALL);
        assert_eq!(out.len(), items.len());
    }

    #[test]
    fn filters_by_status_and_code() {
        let items = vec![
            request("RQ1", "A", "open"),
            request("RQ2", "B", "open"),
            request("RQ3", "C", "completed"),
        ];
        assert_eq!(visible(&items, "rq2", "open").len(), 1);
        assert!(visible(&items, "rq2", "completed").is_empty());
    }
}
