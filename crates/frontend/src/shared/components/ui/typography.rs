use leptos::prelude::*;

/// Heading component: levels 1-4 map to h1-h4
#[component]
pub fn Heading(
    /// Heading level, 1 (default) through 4
    #[prop(optional)]
    level: Option<u8>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Heading content
    children: Children,
) -> impl IntoView {
    let css = move || format!("heading {}", class.get().unwrap_or_default());

    match level.unwrap_or(1) {
        2 => view! { <h2 class=css>{children()}</h2> }.into_any(),
        3 => view! { <h3 class=css>{children()}</h3> }.into_any(),
        4 => view! { <h4 class=css>{children()}</h4> }.into_any(),
        _ => view! { <h1 class=css>{children()}</h1> }.into_any(),
    }
}

/// Text component with tone variants
#[component]
pub fn Text(
    /// Tone: "default", "muted" or "danger"
    #[prop(optional, into)]
    tone: MaybeProp<String>,
    /// Text content
    children: Children,
) -> impl IntoView {
    let tone_class = move || match tone.get().as_deref().unwrap_or("default") {
        "muted" => "text text--muted",
        "danger" => "text text--danger",
        _ => "text",
    };

    view! {
        <span class=tone_class>{children()}</span>
    }
}
