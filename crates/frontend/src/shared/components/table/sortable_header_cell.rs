//! Sortable table header cell
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Tenant"
//!     sort_field="displayName"
//!     current_sort_field=sort_field
//!     sort_ascending=sort_ascending
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    /// Field passed to `on_sort`
    #[prop(into)]
    sort_field: String,
    #[prop(into)] current_sort_field: Signal<String>,
    #[prop(into)] sort_ascending: Signal<bool>,
    on_sort: Callback<String>,
    #[prop(optional, default = 120.0)] min_width: f64,
) -> impl IntoView {
    let sort_field = StoredValue::new(sort_field);

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                on:click=move |_| on_sort.run(sort_field.get_value())
            >
                {label}
                <span class=move || {
                    sort_field.with_value(|f| get_sort_class(&current_sort_field.get(), f))
                }>
                    {move || {
                        sort_field.with_value(|f| {
                            get_sort_indicator(&current_sort_field.get(), f, sort_ascending.get())
                        })
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
