use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Side drawer panel. Same interaction contract as `Modal`: overlay click
/// and the close button both go through `on_close`.
#[component]
pub fn Drawer(
    /// Title shown in the drawer header
    title: String,
    /// Callback when drawer should close
    on_close: Callback<()>,
    /// Which edge the drawer slides from: "right" (default) or "left"
    #[prop(optional, into)]
    side: MaybeProp<String>,
    /// Drawer content
    children: Children,
) -> impl IntoView {
    let side_class = move || {
        if side.get().as_deref() == Some("left") {
            "drawer drawer--left"
        } else {
            "drawer drawer--right"
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="drawer-overlay" on:click=move |_| on_close.run(())>
            <div class=side_class on:click=stop_propagation>
                <div class="drawer-header">
                    <h2 class="drawer-title">{title}</h2>
                    <button class="button button--icon drawer__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="drawer-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
