use crate::shared::list_utils::{apply_search, contains_term, matches_choice, Searchable, ALL};
use contracts::domain::user::{AdminUser, UserRole};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct UsersListState {
    pub items: Vec<AdminUser>,
    pub total: u64,
    pub search_query: String,
    pub role_filter: String,
    pub is_loaded: bool,
}

impl Default for UsersListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            search_query: String::new(),
            role_filter: ALL.to_string(),
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<UsersListState> {
    RwSignal::new(UsersListState::default())
}

impl Searchable for AdminUser {
    fn matches_search(&self, term: &str) -> bool {
        contains_term(&self.full_name, term)
            || contains_term(&self.email, term)
            || contains_term(&self.phone_number, term)
    }
}

/// The backend already filters by role; the role check here keeps the
/// visible subset correct between a role change and the refetch landing.
pub fn visible(items: &[AdminUser], search: &str, role: &str) -> Vec<AdminUser> {
    apply_search(items, search)
        .into_iter()
        .filter(|u| matches_choice(role, &u.role))
        .collect()
}

pub fn active_count(items: &[AdminUser]) -> usize {
    items.iter().filter(|u| u.is_active).count()
}

pub fn role_count(items: &[AdminUser], role: UserRole) -> usize {
    items
        .iter()
        .filter(|u| UserRole::parse(&u.role) == role)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str, email: &str, role: &str, active: bool) -> AdminUser {
        AdminUser {
            user_id: id,
            full_name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            is_active: active,
            ..Default::default()
        }
    }

    #[test]
    fn search_matches_name_email_phone() {
        let items = vec![
            user(1, "Nguyễn Văn A", "a@snaplink.vn", "customer", true),
            user(2, "Trần Thị B", "b@snaplink.vn", "photographer", false),
        ];
        assert_eq!(visible(&items, "văn a", ALL).len(), 1);
        assert_eq!(visible(&items, "b@snaplink", ALL).len(), 1);
        assert_eq!(visible(&items, "snaplink", ALL).len(), 2);
    }

    #[test]
    fn role_filter_and_counts() {
        let items = vec![
            user(1, "A", "a@x.vn", "customer", true),
            user(2, "B", "b@x.vn", "photographer", true),
            user(3, "C", "c@x.vn", "customer", false),
        ];
        assert_eq!(visible(&items, "", "customer").len(), 2);
        assert_eq!(active_count(&items), 2);
        assert_eq!(role_count(&items, UserRole::Customer), 2);
        assert_eq!(role_count(&items, UserRole::Photographer), 1);
    }
}
