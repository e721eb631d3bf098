//! Search, sort and filter helpers shared by list pages
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen::JsCast;

/// Shortest filter text that is applied
pub const MIN_FILTER_LEN: usize = 3;

const DEBOUNCE_MS: i32 = 300;

pub trait Searchable {
    /// Case-insensitive match of `filter` against the searchable columns
    fn matches_filter(&self, filter: &str) -> bool;
}

pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn is_filter_active(filter: &str) -> bool {
    filter.trim().chars().count() >= MIN_FILTER_LEN
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Filters below `MIN_FILTER_LEN` characters leave the list untouched
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if !is_filter_active(filter) {
        return items;
    }
    let filter = filter.trim();
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        format!("Search (min. {} characters)...", MIN_FILTER_LEN)
    } else {
        placeholder
    };

    // local text before debounce
    let (input_value, set_input_value) = signal(String::new());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        if let Some(timeout_id) = debounce_timeout.get_value() {
            window.clear_timeout_with_handle(timeout_id);
        }

        let closure = wasm_bindgen::closure::Closure::once_into_js(move || {
            on_change.run(new_value);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref::<js_sys::Function>(),
            DEBOUNCE_MS,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class="search-input__field"
                class:search-input__field--active=move || is_filter_active(&value.get())
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class of the sort indicator
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tenant(&'static str);

    impl Searchable for Tenant {
        fn matches_filter(&self, filter: &str) -> bool {
            self.0.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl Sortable for Tenant {
        fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
            self.0.cmp(other.0)
        }
    }

    #[test]
    fn short_filters_are_ignored() {
        let items = vec![Tenant("Contoso"), Tenant("Fabrikam")];
        assert_eq!(filter_list(items.clone(), "co"), items);
        assert_eq!(filter_list(items.clone(), "   "), items);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let items = vec![Tenant("Contoso"), Tenant("Fabrikam")];
        assert_eq!(filter_list(items, " FAB "), vec![Tenant("Fabrikam")]);
    }

    #[test]
    fn sort_direction() {
        let mut items = vec![Tenant("b"), Tenant("a"), Tenant("c")];
        sort_list(&mut items, "name", false);
        assert_eq!(items, vec![Tenant("c"), Tenant("b"), Tenant("a")]);
    }

    #[test]
    fn indicator_marks_active_column() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "other", true), " ⇅");
    }
}
