use crate::domain::a001_tenant_standards::api;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::export::{export_filename, export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, sort_list, SearchInput, Searchable, Sortable};
use contracts::domain::a001_tenant_standards::TenantStandardsSummary;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

const FIELD_TENANT: &str = "displayName";
const FIELD_STANDARDS: &str = "StandardsExport";

impl Searchable for TenantStandardsSummary {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.display_name.to_lowercase().contains(&filter)
            || self.standards_export.to_lowercase().contains(&filter)
    }
}

impl Sortable for TenantStandardsSummary {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            FIELD_STANDARDS => self
                .standards_export
                .to_lowercase()
                .cmp(&other.standards_export.to_lowercase()),
            _ => self
                .display_name
                .to_lowercase()
                .cmp(&other.display_name.to_lowercase()),
        }
    }
}

impl CsvExportable for TenantStandardsSummary {
    fn headers() -> Vec<&'static str> {
        vec!["Tenant", "Applied Standards"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![self.display_name.clone(), self.standards_export.clone()]
    }
}

/// Display names are not unique across tenants; the position keeps keys distinct.
fn row_key(index: usize, row: &TenantStandardsSummary) -> (usize, String) {
    (index, row.display_name.clone())
}

/// Applied standards of every tenant
#[component]
pub fn StandardsOverview() -> impl IntoView {
    let (items, set_items) = signal(Vec::<TenantStandardsSummary>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (filter, set_filter) = signal(String::new());
    let (sort_field, set_sort_field) = signal(FIELD_TENANT.to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let load_items = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_all_summaries().await {
                Ok(rows) => {
                    log!("loaded standards of {} tenants", rows.len());
                    set_items.set(rows);
                }
                Err(e) => {
                    log::warn!("failed to load standards overview: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };
    load_items();

    let visible_rows = Memo::new(move |_| {
        let mut rows = filter_list(items.get(), &filter.get());
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    });

    let toggle_sort = move |field: String| {
        if sort_field.get_untracked() == field {
            set_sort_ascending.update(|v| *v = !*v);
        } else {
            set_sort_field.set(field);
            set_sort_ascending.set(true);
        }
    };

    let handle_export = move |_| {
        let rows = visible_rows.get_untracked();
        if let Err(e) = export_to_csv(&rows, &export_filename("Standards")) {
            log!("export failed: {}", e);
            set_error.set(Some(e));
        }
    };

    view! {
        <div class="standards-overview">
            <div class="standards-overview__toolbar">
                <SearchInput
                    value=filter
                    on_change=Callback::new(move |text: String| set_filter.set(text))
                />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=handle_export
                    disabled=Signal::derive(move || visible_rows.with(|r| r.is_empty()))
                >
                    {icon("download")}
                    " Export CSV"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_items()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
            </div>

            {move || error.get().map(|err| view! {
                <div class="alert alert--error">{err}</div>
            })}

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell
                                label="Tenant"
                                sort_field=FIELD_TENANT
                                current_sort_field=sort_field
                                sort_ascending=sort_ascending
                                on_sort=Callback::new(toggle_sort)
                                min_width=200.0
                            />
                            <SortableHeaderCell
                                label="Applied Standards"
                                sort_field=FIELD_STANDARDS
                                current_sort_field=sort_field
                                sort_ascending=sort_ascending
                                on_sort=Callback::new(toggle_sort)
                                min_width=300.0
                            />
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || visible_rows.get().into_iter().enumerate()
                            key=|(index, row)| row_key(*index, row)
                            children=move |(_, row)| {
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {row.display_name}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {row.standards_export}
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn summary(name: &str, standards: &str) -> TenantStandardsSummary {
        TenantStandardsSummary {
            display_name: name.into(),
            standards_export: standards.into(),
        }
    }

    #[test]
    fn rows_with_same_display_name_get_distinct_keys() {
        let rows = vec![
            summary("Contoso", "AuditLog"),
            summary("Contoso", "AuditLog"),
            summary("Fabrikam", ""),
        ];
        let keys: HashSet<_> = rows
            .iter()
            .enumerate()
            .map(|(index, row)| row_key(index, row))
            .collect();
        assert_eq!(keys.len(), rows.len());
    }

    #[test]
    fn filter_matches_either_column() {
        let row = summary("Contoso", "SpoofWarn, AuditLog");
        assert!(row.matches_filter("conto"));
        assert!(row.matches_filter("spoof"));
        assert!(!row.matches_filter("fabrikam"));
    }
}
