use crate::domain::a001_tenant_standards::ui::StandardsPage;
use contracts::domain::a001_tenant_standards::TenantKey;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_query_map;
use leptos_router::path;

/// Query parameter carrying the selected tenant
pub const TENANT_QUERY_PARAM: &str = "tenant";

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <p class="page">"Page not found"</p> }>
                    <Route path=path!("/") view=StandardsRoute />
                    <Route path=path!("/tenant/standards") view=StandardsRoute />
                </Routes>
            </main>
        </Router>
    }
}

/// Reads `?tenant=` and mounts the standards page for it
#[component]
fn StandardsRoute() -> impl IntoView {
    let query = use_query_map();
    let tenant = Memo::new(move |_| {
        query.with(|q| q.get(TENANT_QUERY_PARAM).and_then(|v| TenantKey::parse(&v)))
    });

    move || match tenant.get() {
        Some(tenant) => {
            log::debug!("opening standards of {}", tenant);
            view! { <StandardsPage tenant=tenant /> }.into_any()
        }
        None => view! {
            <div class="page">
                <p class="page__hint">"Select a tenant to view and edit its standards."</p>
            </div>
        }
        .into_any(),
    }
}
