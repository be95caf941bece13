use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard stat card: icon, value and caption.
#[component]
pub fn StatCard(
    /// Card caption
    title: &'static str,
    /// Pre-formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Icon name for `icons::icon`
    #[prop(optional)]
    icon_name: Option<&'static str>,
    /// Accent: "default", "success", "warning" or "error"
    #[prop(optional, into)]
    accent: MaybeProp<String>,
) -> impl IntoView {
    let accent_class = move || match accent.get().as_deref().unwrap_or("default") {
        "success" => "stat-card stat-card--success",
        "warning" => "stat-card stat-card--warning",
        "error" => "stat-card stat-card--error",
        _ => "stat-card",
    };

    view! {
        <div class=accent_class>
            {icon_name.map(|name| view! {
                <span class="stat-card__icon">{icon(name)}</span>
            })}
            <div class="stat-card__body">
                <span class="stat-card__value">{move || value.get()}</span>
                <span class="stat-card__title">{title}</span>
            </div>
        </div>
    }
}
