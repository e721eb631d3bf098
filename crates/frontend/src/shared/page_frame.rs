//! PageFrame: root wrapper of every page.
//!
//! Sets two metadata attributes on the root element:
//!   - `id`                 `"{entity}--{category}"`, e.g. `"a001_tenant_standards--detail"`
//!   - `data-page-category` one of the `PAGE_CAT_*` constants

use leptos::prelude::*;

/// Edit form for a single record
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };
    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
