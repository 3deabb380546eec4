pub mod api_utils;
pub mod auth;
pub mod components;
pub mod format;
pub mod icons;
pub mod list_utils;
pub mod stats;
