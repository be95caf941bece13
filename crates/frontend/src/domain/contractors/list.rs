use super::demo_contractors;
use crate::shared::components::table::{Column, DataTable};
use crate::shared::components::ui::{Badge, Button, Heading, Input, Select, Text};
use crate::shared::components::Pagination;
use crate::shared::drawer::Drawer;
use contracts::domain::contractor::{Contractor, ContractorStatus};
use leptos::prelude::*;

fn status_options() -> Vec<(String, String)> {
    vec![
        ("all".to_string(), "Все".to_string()),
        ("active".to_string(), "Допущен".to_string()),
        ("suspended".to_string(), "Приостановлен".to_string()),
        ("archived".to_string(), "В архиве".to_string()),
    ]
}

fn columns(set_details: WriteSignal<Option<Contractor>>) -> Vec<Column<Contractor>> {
    vec![
        Column::text("Наименование", |c: &Contractor| c.name.clone()),
        Column::text("ИНН", |c: &Contractor| c.inn.clone()),
        Column::text("E-mail", |c: &Contractor| c.contact_email.clone()),
        Column::text("Работники", |c: &Contractor| c.workers.to_string()),
        Column::new("Статус", |c: Contractor| {
            view! {
                <Badge variant=c.status.badge_variant().to_string()>
                    {c.status.label()}
                </Badge>
            }
            .into_any()
        }),
        Column::text("Регистрация", |c: &Contractor| {
            c.registered_at.format("%d.%m.%Y").to_string()
        }),
        Column::new("", move |c: Contractor| {
            view! {
                <Button
                    variant="ghost".to_string()
                    size="sm".to_string()
                    on_click=Callback::new(move |_| set_details.set(Some(c.clone())))
                >
                    "Карточка"
                </Button>
            }
            .into_any()
        }),
    ]
}

/// Реестр подрядчиков: поиск, фильтр по статусу, постраничный вывод
/// и карточка в боковой панели.
#[component]
pub fn ContractorsPage() -> impl IntoView {
    let all = StoredValue::new(demo_contractors());
    let (current_page, set_current_page) = signal(1usize);
    let (page_size, set_page_size) = signal(10usize);
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal("all".to_string());
    let (details, set_details) = signal(Option::<Contractor>::None);

    let filtered = Memo::new(move |_| {
        let needle = search.get().trim().to_lowercase();
        let status = status_filter.get();
        all.with_value(|rows| {
            rows.iter()
                .filter(|c| {
                    let by_status = match status.as_str() {
                        "active" => c.status == ContractorStatus::Active,
                        "suspended" => c.status == ContractorStatus::Suspended,
                        "archived" => c.status == ContractorStatus::Archived,
                        _ => true,
                    };
                    let by_name =
                        needle.is_empty() || c.name.to_lowercase().contains(&needle);
                    by_status && by_name
                })
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let total_pages = Memo::new(move |_| {
        let size = page_size.get().max(1);
        filtered.get().len().div_ceil(size)
    });

    let page_rows = Memo::new(move |_| {
        let size = page_size.get().max(1);
        let page = current_page.get().max(1);
        filtered
            .get()
            .into_iter()
            .skip((page - 1) * size)
            .take(size)
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page page--contractors">
            <Heading level=2>"Подрядчики"</Heading>
            <div class="page__filters">
                <Input
                    value=search
                    placeholder="Поиск по наименованию".to_string()
                    on_input=Callback::new(move |value: String| {
                        set_search.set(value);
                        set_current_page.set(1);
                    })
                />
                <Select
                    label="Статус".to_string()
                    value=status_filter
                    options=status_options()
                    on_change=Callback::new(move |value: String| {
                        set_status_filter.set(value);
                        set_current_page.set(1);
                    })
                />
            </div>
            <DataTable
                columns=columns(set_details)
                rows=Signal::derive(move || page_rows.get())
                empty_message="Подрядчики не найдены".to_string()
            />
            <Pagination
                current_page=current_page
                total_pages=Signal::derive(move || total_pages.get())
                on_page_change=Callback::new(move |page| set_current_page.set(page))
                page_size=Signal::from(page_size)
                on_page_size_change=Callback::new(move |size| {
                    set_page_size.set(size);
                    set_current_page.set(1);
                })
            />
            {move || details.get().map(|c| {
                let registered = c.registered_at.format("%d.%m.%Y").to_string();
                view! {
                    <Drawer
                        title=c.name.clone()
                        on_close=Callback::new(move |_| set_details.set(None))
                    >
                        <dl class="details-list">
                            <dt>"ИНН"</dt>
                            <dd><Text>{c.inn.clone()}</Text></dd>
                            <dt>"E-mail"</dt>
                            <dd><Text>{c.contact_email.clone()}</Text></dd>
                            <dt>"Работников в реестре"</dt>
                            <dd><Text>{c.workers.to_string()}</Text></dd>
                            <dt>"Статус"</dt>
                            <dd>
                                <Badge variant=c.status.badge_variant().to_string()>
                                    {c.status.label()}
                                </Badge>
                            </dd>
                            <dt>"Дата регистрации"</dt>
                            <dd><Text tone="muted".to_string()>{registered}</Text></dd>
                        </dl>
                    </Drawer>
                }
            })}
        </div>
    }
}
