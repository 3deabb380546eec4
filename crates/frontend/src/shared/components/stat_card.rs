use crate::shared::icons::icon;
use leptos::prelude::*;

/// Summary card shown at the top of list pages and the dashboard.
///
/// The value is pre-formatted by the caller so the card stays agnostic
/// of currency vs count vs rating semantics.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Pre-formatted value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Change % relative to previous period
    #[prop(into, optional)]
    change_percent: Signal<Option<f64>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || value.get().unwrap_or_else(|| "\u{2014}".to_string());

    let change_view = move || {
        change_percent.get().map(|pct| {
            let (arrow, cls) = if pct > 0.5 {
                ("\u{2191}", "stat-card__change stat-card__change--up")
            } else if pct < -0.5 {
                ("\u{2193}", "stat-card__change stat-card__change--down")
            } else {
                ("", "stat-card__change stat-card__change--flat")
            };
            let text = format!("{}{:.1}%", arrow, pct.abs());
            view! { <span class=cls>{text}</span> }
        })
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {formatted}
                    {change_view}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}
