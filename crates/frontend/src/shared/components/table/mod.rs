pub mod nested_table;
pub mod tree_model;

pub use nested_table::NestedTable;
pub use tree_model::{TreeModel, TreeRow, VisibleRow, DEFAULT_MAX_LEVEL};

use leptos::prelude::*;

/// Column descriptor shared by `DataTable` and `NestedTable`.
#[derive(Clone)]
pub struct Column<T: Send + Sync + 'static> {
    pub title: &'static str,
    /// Renders one cell for the given row
    pub cell: Callback<T, AnyView>,
}

impl<T: Send + Sync + 'static> Column<T> {
    pub fn new(
        title: &'static str,
        cell: impl Fn(T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            title,
            cell: Callback::new(cell),
        }
    }

    /// Shorthand for plain text cells.
    pub fn text(title: &'static str, cell: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self::new(title, move |row: T| {
            view! { <span>{cell(&row)}</span> }.into_any()
        })
    }
}

/// Flat data table with typed columns and an empty-state row.
#[component]
pub fn DataTable<T: Clone + Send + Sync + 'static>(
    /// Column descriptors, rendered in order
    columns: Vec<Column<T>>,
    /// Rows of the current page
    #[prop(into)]
    rows: Signal<Vec<T>>,
    /// Message shown when there are no rows
    #[prop(optional, into)]
    empty_message: MaybeProp<String>,
) -> impl IntoView {
    let column_count = columns.len();
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
        <table class="data-table">
            <thead>
                <tr>{headers}</tr>
            </thead>
            <tbody>
                {move || {
                    let data = rows.get();
                    if data.is_empty() {
                        view! {
                            <tr class="data-table__empty">
                                <td colspan=column_count.to_string()>{message()}</td>
                            </tr>
                        }
                        .into_any()
                    } else {
                        let columns = columns.clone();
                        data.into_iter()
                            .map(|row| {
                                view! {
                                    <tr class="data-table__row">
                                        {columns
                                            .iter()
                                            .map(|col| {
                                                view! {
                                                    <td class="data-table__td">
                                                        {col.cell.run(row.clone())}
                                                    </td>
                                                }
                                            })
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </tbody>
        </table>
    }
}
