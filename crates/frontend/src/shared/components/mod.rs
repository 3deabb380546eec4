pub mod badge;
pub mod empty_state;
pub mod stat_card;

pub use badge::StatusBadge;
pub use empty_state::EmptyState;
pub use stat_card::StatCard;
