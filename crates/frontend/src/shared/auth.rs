//! Access-token storage.
//!
//! The token is issued by the external identity provider and written here by
//! its redirect page; this module only reads and clears it.

use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "snaplink_access_token";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_access_token() -> Option<String> {
    local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

pub fn clear_access_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}
