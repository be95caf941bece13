pub mod global_context;
pub mod sidebar;
pub mod top_header;

use global_context::use_app_context;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(content: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_app_context();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Show when=move || ctx.sidebar_open.get()>
                    <sidebar::Sidebar />
                </Show>
                <div class="app-main">
                    {move || content()}
                </div>
            </div>
        </div>
    }
}
