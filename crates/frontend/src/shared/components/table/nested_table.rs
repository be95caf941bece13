use super::tree_model::{TreeModel, TreeRow};
use super::Column;
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::collections::HashMap;

/// Nested table over a `TreeModel`: indented rows, expand chevrons and an
/// optional approval column.
///
/// The component is a dumb projection: the model signal and the expansion
/// map are owned by the caller, approve/reject are forwarded as callbacks
/// with the row id and the caller decides how to commit the transition
/// (typically `TreeModel::set_status` + signal update).
#[component]
pub fn NestedTable<R: TreeRow + Send + Sync + 'static>(
    /// Column descriptors; the first column carries the expand affordance
    columns: Vec<Column<R>>,
    /// Tree model held by the caller
    #[prop(into)]
    model: Signal<TreeModel<R>>,
    /// Per-row expansion flags, created empty at mount by the caller
    expanded: RwSignal<HashMap<String, bool>>,
    /// Adds the approval column with status badges and action buttons
    #[prop(optional)]
    enable_approval: bool,
    /// Requested approve transition (row id)
    #[prop(optional)]
    on_approve: Option<Callback<String>>,
    /// Requested reject transition (row id)
    #[prop(optional)]
    on_reject: Option<Callback<String>>,
    /// Message shown when there are no rows
    #[prop(optional, into)]
    empty_message: MaybeProp<String>,
) -> impl IntoView {
    let column_count = columns.len() + usize::from(enable_approval);
    let headers = columns
        .iter()
        .map(|col| view! { <th class="data-table__th">{col.title}</th> })
        .collect_view();
    let message = move || {
        empty_message
            .get()
            .unwrap_or_else(|| "Нет данных".to_string())
    };

    view! {
        <table class="data-table data-table--nested">
            <thead>
                <tr>
                    {headers}
                    {enable_approval.then(|| view! { <th class="data-table__th">"Статус"</th> })}
                </tr>
            </thead>
            <tbody>
                {move || {
                    if model.with(|m| m.is_empty()) {
                        return view! {
                            <tr class="data-table__empty">
                                <td colspan=column_count.to_string()>{message()}</td>
                            </tr>
                        }
                        .into_any();
                    }

                    let columns = columns.clone();
                    let visible = model.with(|m| expanded.with(|e| m.visible_rows(e)));
                    visible
                        .into_iter()
                        .map(|line| {
                            let row = model.with(|m| m.row(line.index).clone());
                            let row_id = row.id().to_string();
                            let expandable = model.with(|m| m.is_expandable(line.index));
                            let is_open = {
                                let row_id = row_id.clone();
                                move || expanded.with(|e| e.get(&row_id).copied().unwrap_or(false))
                            };
                            let toggle = {
                                let row_id = row_id.clone();
                                move |_: leptos::ev::MouseEvent| {
                                    model.with(|m| {
                                        expanded.update(|e| m.toggle_expanded(e, &row_id));
                                    });
                                }
                            };
                            let indent = format!("padding-left: {}px;", 8 + line.depth * 20);

                            let mut cells = Vec::new();
                            for (pos, col) in columns.iter().enumerate() {
                                if pos == 0 {
                                    let chevron = if expandable {
                                        let is_open = is_open.clone();
                                        view! {
                                            <button class="tree-toggle" on:click=toggle.clone()>
                                                {move || if is_open() {
                                                    icon("chevron-down")
                                                } else {
                                                    icon("chevron-right")
                                                }}
                                            </button>
                                        }
                                        .into_any()
                                    } else {
                                        view! { <span class="tree-toggle tree-toggle--empty"></span> }
                                            .into_any()
                                    };
                                    cells.push(
                                        view! {
                                            <td class="data-table__td data-table__td--tree" style=indent.clone()>
                                                {chevron}
                                                {col.cell.run(row.clone())}
                                            </td>
                                        }
                                        .into_any(),
                                    );
                                } else {
                                    cells.push(
                                        view! {
                                            <td class="data-table__td">{col.cell.run(row.clone())}</td>
                                        }
                                        .into_any(),
                                    );
                                }
                            }

                            if enable_approval {
                                let status = model.with(|m| m.display_status(line.index));
                                let approve_id = row_id.clone();
                                let reject_id = row_id.clone();
                                cells.push(
                                    view! {
                                        <td class="data-table__td data-table__td--approval">
                                            <StatusBadge status=status />
                                            {status.is_pending().then(|| view! {
                                                <button
                                                    class="button button--icon button--approve"
                                                    title="Согласовать"
                                                    on:click=move |_| {
                                                        if let Some(handler) = on_approve {
                                                            handler.run(approve_id.clone());
                                                        }
                                                    }
                                                >
                                                    {icon("check")}
                                                </button>
                                                <button
                                                    class="button button--icon button--reject"
                                                    title="Отклонить"
                                                    on:click=move |_| {
                                                        if let Some(handler) = on_reject {
                                                            handler.run(reject_id.clone());
                                                        }
                                                    }
                                                >
                                                    {icon("x")}
                                                </button>
                                            })}
                                        </td>
                                    }
                                    .into_any(),
                                );
                            }

                            view! { <tr class="data-table__row">{cells}</tr> }
                        })
                        .collect_view()
                        .into_any()
                }}
            </tbody>
        </table>
    }
}
