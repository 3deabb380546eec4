use crate::layout::nav::{use_nav, AdminPage};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Left navigation with one entry per admin page.
#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = use_nav();

    let entries = AdminPage::ALL
        .iter()
        .map(|page| {
            let page = *page;
            let is_active = move || nav.current.get() == page;
            let class = move || {
                if is_active() {
                    "sidebar__item sidebar__item--active"
                } else {
                    "sidebar__item"
                }
            };
            view! {
                <button class=class on:click=move |_| nav.current.set(page)>
                    <span class="sidebar__icon">{icon(page.icon_name())}</span>
                    <span class="sidebar__label">{page.title()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                {icon("camera")}
                <span>"SnapLink"</span>
            </div>
            <nav class="sidebar__nav">{entries}</nav>
        </aside>
    }
}
