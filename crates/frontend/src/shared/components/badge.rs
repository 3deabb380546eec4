use contracts::shared::status::StatusTone;
use leptos::prelude::*;

pub fn tone_class(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Success => "badge badge--success",
        StatusTone::Warning => "badge badge--warning",
        StatusTone::Danger => "badge badge--error",
        StatusTone::Info => "badge badge--info",
        StatusTone::Neutral => "badge badge--neutral",
    }
}

/// Status badge colored by the tone of a domain status value.
#[component]
pub fn StatusBadge(
    /// Tone decides the color scheme
    #[prop(into)]
    tone: Signal<StatusTone>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    view! {
        <span class=move || tone_class(tone.get())>
            {children()}
        </span>
    }
}
