//! List filtering shared by every admin list page.
//!
//! Filtering is a pure function of the fetched collection and the current
//! filter params: it never refetches, never reorders, and always yields a
//! subset of the source. Cheap enough to run on every keystroke.

/// Sentinel value for categorical selects meaning "no filter applied".
pub const ALL: &str = "all";

/// Types that can be matched against the free-text search box.
///
/// Each entity matches over its own fixed set of text fields. Matching is a
/// case-insensitive literal substring check — no diacritic folding, so "hn"
/// does not match "Hà Nội".
pub trait Searchable {
    fn matches_search(&self, term: &str) -> bool;
}

/// Case-insensitive substring helper for `Searchable` impls. The needle must
/// already be lower-cased.
pub fn contains_term(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Filter `items` by the search term. An empty or whitespace-only term
/// matches everything.
pub fn apply_search<T: Searchable + Clone>(items: &[T], term: &str) -> Vec<T> {
    let term = term.trim();
    if term.is_empty() {
        return items.to_vec();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_search(&needle))
        .cloned()
        .collect()
}

/// Categorical filter check against the `ALL` sentinel.
pub fn matches_choice(filter: &str, value: &str) -> bool {
    filter == ALL || filter == value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        code: String,
        province: String,
        status: String,
    }

    impl Searchable for Row {
        fn matches_search(&self, term: &str) -> bool {
            contains_term(&self.code, term) || contains_term(&self.province, term)
        }
    }

    fn row(code: &str, province: &str, status: &str) -> Row {
        Row {
            code: code.into(),
            province: province.into(),
            status: status.into(),
        }
    }

    #[test]
    fn empty_term_matches_everything() {
        let items = vec![row("BK1", "Hà Nội", "pending"), row("BK2", "Huế", "completed")];
        assert_eq!(apply_search(&items, "").len(), 2);
        assert_eq!(apply_search(&items, "   ").len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = vec![row("BK100", "Hà Nội", "pending")];
        assert_eq!(apply_search(&items, "bk1").len(), 1);
        assert_eq!(apply_search(&items, "hà").len(), 1);
        assert_eq!(apply_search(&items, "BK9").len(), 0);
    }

    #[test]
    fn no_diacritic_folding() {
        // "HN" is not a literal substring of any of these names.
        let items = vec![
            row("A", "Hà Nội", "pending"),
            row("B", "Huế", "pending"),
            row("C", "Hồ Chí Minh", "pending"),
        ];
        assert!(apply_search(&items, "HN").is_empty());
    }

    #[test]
    fn empty_source_yields_empty_result() {
        let items: Vec<Row> = Vec::new();
        assert!(apply_search(&items, "anything").is_empty());
    }

    #[test]
    fn choice_filter_keeps_order_and_is_exact() {
        let statuses = ["pending", "confirmed", "completed", "cancelled", "completed"];
        let items: Vec<Row> = statuses
            .iter()
            .enumerate()
            .map(|(i, s)| row(&format!("BK{}", i), "Hà Nội", s))
            .collect();

        let filtered: Vec<&Row> = items
            .iter()
            .filter(|r| matches_choice("completed", &r.status))
            .collect();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].code, "BK2");
        assert_eq!(filtered[1].code, "BK4");

        // "all" is a no-op filter
        let all: Vec<&Row> = items
            .iter()
            .filter(|r| matches_choice(ALL, &r.status))
            .collect();
        assert_eq!(all.len(), items.len());
    }
}
