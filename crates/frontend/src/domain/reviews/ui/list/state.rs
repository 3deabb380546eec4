use crate::shared::list_utils::{apply_search, contains_term, Searchable, ALL};
use crate::shared::stats::average;
use contracts::domain::review::Review;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ReviewsListState {
    pub items: Vec<Review>,
    pub search_query: String,
    pub rating_filter: String,
    pub is_loaded: bool,
}

impl Default for ReviewsListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            rating_filter: ALL.to_string(),
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<ReviewsListState> {
    RwSignal::new(ReviewsListState::default())
}

impl Searchable for Review {
    fn matches_search(&self, term: &str) -> bool {
        self.customer_name
            .as_deref()
            .is_some_and(|name| contains_term(name, term))
            || contains_term(&self.comment, term)
    }
}

/// The rating filter carries the star count as a string ("5", "4", ...).
pub fn visible(items: &[Review], search: &str, rating: &str) -> Vec<Review> {
    let searched = apply_search(items, search);
    if rating == ALL {
        return searched;
    }
    match rating.parse::<u8>() {
        Ok(stars) => searched.into_iter().filter(|r| r.rating == stars).collect(),
        Err(_) => searched,
    }
}

pub fn average_rating(items: &[Review]) -> f64 {
    let ratings: Vec<f64> = items.iter().map(|r| r.rating as f64).collect();
    average(&ratings)
}

pub fn five_star_count(items: &[Review]) -> usize {
    items.iter().filter(|r| r.rating == 5).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: i64, name: Option<&str>, comment: &str, rating: u8) -> Review {
        Review {
            review_id: id,
            rating,
            comment: comment.to_string(),
            customer_name: name.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn search_matches_name_and_comment() {
        let items = vec![
            review(1, Some("Minh Anh"), "Ảnh rất đẹp", 5),
            review(2, None, "Giao ảnh trễ", 2),
        ];
        assert_eq!(visible(&items, "minh", ALL).len(), 1);
        assert_eq!(visible(&items, "trễ", ALL).len(), 1);
        assert!(visible(&items, "tuyệt", ALL).is_empty());
    }

    #[test]
    fn rating_filter_is_exact() {
        let items = vec![
            review(1, None, "", 5),
            review(2, None, "", 4),
            review(3, None, "", 5),
        ];
        assert_eq!(visible(&items, "", "5").len(), 2);
        assert_eq!(visible(&items, "", "1").len(), 0);
        assert_eq!(visible(&items, "", ALL).len(), 3);
    }

    #[test]
    fn average_is_one_decimal() {
        let items = vec![
            review(1, None, "", 5),
            review(2, None, "", 4),
            review(3, None, "", 4),
        ];
        assert_eq!(average_rating(&items), 4.3);
        assert_eq!(average_rating(&[]), 0.0);
        assert_eq!(five_star_count(&items), 1);
    }
}
