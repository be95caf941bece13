use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, set_auth_state) = use_auth();

    let username = move || {
        auth_state
            .get()
            .user
            .map(|u| u.full_name)
            .unwrap_or_default()
    };

    view! {
        <header data-zone="header" class="app-header">
            <div class="app-header__content">
                <Button
                    variant="ghost".to_string()
                    on_click=Callback::new(move |_| ctx.toggle_sidebar())
                >
                    {icon("menu")}
                </Button>
                <span class="app-header__title">"КСУБ · Безопасность подрядчиков"</span>
            </div>
            <div class="app-header__actions">
                <span class="app-header__user">{username}</span>
                <Button
                    variant="ghost".to_string()
                    on_click=Callback::new(move |_| set_auth_state.set(Default::default()))
                >
                    {icon("log-out")}
                </Button>
            </div>
        </header>
    }
}
