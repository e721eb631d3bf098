use super::actions::RunNowAction;
use super::details::StandardsEditor;
use super::list::StandardsOverview;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::domain::a001_tenant_standards::TenantKey;
use leptos::prelude::*;
use thaw::*;

/// Editor of one tenant's standards next to the all-tenants overview
#[component]
pub fn StandardsPage(tenant: TenantKey) -> impl IntoView {
    let title = format!("Standards: {}", tenant);

    view! {
        <PageFrame page_id="a001_tenant_standards--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <h2>{title}</h2>
            </div>
            <div class="page__content standards-page">
                <Card class="standards-page__card">
                    <CardHeader>
                        <h3>"List and edit standard"</h3>
                        <CardHeaderAction slot>
                            <RunNowAction />
                        </CardHeaderAction>
                    </CardHeader>
                    <StandardsEditor tenant=tenant />
                </Card>
                <Card class="standards-page__card">
                    <CardHeader>
                        <h3>"Currently Applied Standards"</h3>
                    </CardHeader>
                    <StandardsOverview />
                </Card>
            </div>
        </PageFrame>
    }
}
