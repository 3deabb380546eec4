use crate::layout::nav::use_nav;
use crate::shared::auth;
use leptos::prelude::*;
use thaw::*;

/// Top bar with the current page title and sign-out.
#[component]
pub fn Header() -> impl IntoView {
    let nav = use_nav();
    let title = move || nav.current.get().title();

    let sign_out = move |_| {
        auth::clear_access_token();
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <header class="app-header">
            <h1 class="app-header__title">{title}</h1>
            <div class="app-header__meta">
                <span>"SnapLink Admin"</span>
                <Button appearance=ButtonAppearance::Subtle on_click=sign_out>
                    "Đăng xuất"
                </Button>
            </div>
        </header>
    }
}
