use super::demo_permits;
use crate::shared::components::table::{Column, NestedTable, TreeModel, DEFAULT_MAX_LEVEL};
use crate::shared::components::ui::{Button, Checkbox, Heading, RadioGroup};
use crate::shared::modal::Modal;
use contracts::domain::work_permit::WorkPermit;
use contracts::shared::approval::ApprovalStatus;
use leptos::prelude::*;
use std::collections::HashMap;

fn columns() -> Vec<Column<WorkPermit>> {
    vec![
        Column::text("Наименование", |p: &WorkPermit| p.title.clone()),
        Column::text("Подрядчик", |p: &WorkPermit| p.contractor.clone()),
        Column::text("Объект", |p: &WorkPermit| p.site.clone()),
        Column::text("Сроки", |p: &WorkPermit| {
            format!(
                "{} — {}",
                p.starts_on.format("%d.%m.%Y"),
                p.ends_on.format("%d.%m.%Y")
            )
        }),
    ]
}

fn reject_reasons() -> Vec<(String, String)> {
    vec![
        ("safety".to_string(), "Нарушение требований ОТ".to_string()),
        ("documents".to_string(), "Неполный комплект документов".to_string()),
        ("other".to_string(), "Другое".to_string()),
    ]
}

/// Журнал нарядов-допусков: вложенная таблица с согласованием.
///
/// Модель и карта разворотов живут здесь; approve/reject фиксируются
/// через `TreeModel::set_status`, сами строки-источники не меняются.
/// Отклонение подтверждается в модальном окне с указанием причины.
#[component]
pub fn PermitsPage() -> impl IntoView {
    let model = RwSignal::new(TreeModel::build(&demo_permits(), DEFAULT_MAX_LEVEL));
    let expanded = RwSignal::new(HashMap::<String, bool>::new());

    // Ожидающее подтверждения отклонение (id узла)
    let (reject_target, set_reject_target) = signal(Option::<String>::None);
    let (reject_reason, set_reject_reason) = signal("safety".to_string());
    let (notify_contractor, set_notify_contractor) = signal(true);

    let on_approve = Callback::new(move |id: String| {
        model.update(|m| {
            m.set_status(&id, ApprovalStatus::Approved);
        });
    });
    let on_reject = Callback::new(move |id: String| {
        set_reject_reason.set("safety".to_string());
        set_reject_target.set(Some(id));
    });

    let confirm_reject = move |id: String| {
        model.update(|m| {
            m.set_status(&id, ApprovalStatus::Rejected);
        });
        log::info!(
            "permit {} rejected: reason={}, notify={}",
            id,
            reject_reason.get_untracked(),
            notify_contractor.get_untracked()
        );
        set_reject_target.set(None);
    };

    view! {
        <div class="page page--permits">
            <Heading level=2>"Наряды-допуски"</Heading>
            <NestedTable
                columns=columns()
                model=Signal::derive(move || model.get())
                expanded=expanded
                enable_approval=true
                on_approve=on_approve
                on_reject=on_reject
                empty_message="Нарядов-допусков нет".to_string()
            />
            {move || reject_target.get().map(|id| {
                let confirm_id = id.clone();
                view! {
                    <Modal
                        title="Отклонение наряда-допуска".to_string()
                        on_close=Callback::new(move |_| set_reject_target.set(None))
                    >
                        <RadioGroup
                            label="Причина".to_string()
                            value=reject_reason
                            on_change=Callback::new(move |value: String| set_reject_reason.set(value))
                            name="reject-reason".to_string()
                            options=reject_reasons()
                        />
                        <Checkbox
                            label="Уведомить подрядчика".to_string()
                            checked=notify_contractor
                            on_change=Callback::new(move |checked: bool| set_notify_contractor.set(checked))
                        />
                        <div class="modal-footer">
                            <Button
                                variant="danger".to_string()
                                on_click=Callback::new(move |_| confirm_reject(confirm_id.clone()))
                            >
                                "Отклонить"
                            </Button>
                            <Button
                                variant="secondary".to_string()
                                on_click=Callback::new(move |_| set_reject_target.set(None))
                            >
                                "Отмена"
                            </Button>
                        </div>
                    </Modal>
                }
            })}
        </div>
    }
}
