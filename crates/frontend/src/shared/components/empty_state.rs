use crate::shared::icons::icon;
use leptos::prelude::*;

/// Placeholder shown when a list query returns no rows.
#[component]
pub fn EmptyState(
    /// Icon name from the icon() helper
    icon_name: String,
    /// Main message
    message: String,
    /// Optional hint under the message
    #[prop(optional, into)]
    hint: MaybeProp<String>,
) -> impl IntoView {
    let hint_view = move || {
        hint.get().map(|h| {
            view! { <div class="empty-state__hint">{h}</div> }
        })
    };

    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon(&icon_name)}</div>
            <div class="empty-state__message">{message}</div>
            {hint_view}
        </div>
    }
}
