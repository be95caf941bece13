//! Sidebar with collapsible menu groups

use crate::layout::global_context::{use_app_context, Section};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<Section>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "monitoring",
            label: "Мониторинг",
            icon: "bar-chart",
            items: vec![Section::Overview],
        },
        MenuGroup {
            id: "registry",
            label: "Реестры",
            icon: "building",
            items: vec![Section::Contractors],
        },
        MenuGroup {
            id: "documents",
            label: "Документы",
            icon: "file-text",
            items: vec![Section::Permits],
        },
    ]
}

#[component]
fn SidebarGroup(group: MenuGroup) -> impl IntoView {
    let ctx = use_app_context();
    let (collapsed, set_collapsed) = signal(false);
    let items = group.items.clone();

    view! {
        <div class="app-sidebar__group">
            <div
                class="app-sidebar__group-header"
                on:click=move |_| set_collapsed.update(|c| *c = !*c)
            >
                <span class="app-sidebar__group-icon">{icon(group.icon)}</span>
                <span class="app-sidebar__group-label">{group.label}</span>
                {move || if collapsed.get() {
                    icon("chevron-right")
                } else {
                    icon("chevron-down")
                }}
            </div>
            <Show when=move || !collapsed.get()>
                <ul class="app-sidebar__items">
                    {items.iter().map(|&section| {
                        let is_active = move || ctx.active.get() == section;
                        view! {
                            <li
                                class=move || {
                                    if is_active() {
                                        "app-sidebar__item app-sidebar__item--active"
                                    } else {
                                        "app-sidebar__item"
                                    }
                                }
                                on:click=move |_| ctx.open_section(section)
                            >
                                {icon(section.icon())}
                                <span>{section.label()}</span>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="app-sidebar">
            {menu_groups().into_iter().map(|group| {
                view! { <SidebarGroup group=group /> }
            }).collect_view()}
        </nav>
    }
}
