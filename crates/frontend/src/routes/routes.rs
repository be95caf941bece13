use crate::dashboards::overview::OverviewPage;
use crate::domain::contractors::list::ContractorsPage;
use crate::domain::permits::tree::PermitsPage;
use crate::layout::global_context::{use_app_context, Section};
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Shell content=move || {
            match ctx.active.get() {
                Section::Overview => view! { <OverviewPage /> }.into_any(),
                Section::Contractors => view! { <ContractorsPage /> }.into_any(),
                Section::Permits => view! { <PermitsPage /> }.into_any(),
            }
        } />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().user.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
