use super::section::FormSectionView;
use super::view_model::{RecordLoad, StandardsEditorVm};
use crate::domain::a001_tenant_standards::ui::actions::DeleteStandardAction;
use crate::shared::icons::icon;
use contracts::domain::a001_tenant_standards::{applied_banner, TenantKey};
use leptos::prelude::*;
use thaw::*;

const SKELETON_LINES: usize = 20;

#[component]
pub fn StandardsEditor(tenant: TenantKey) -> impl IntoView {
    let vm = StandardsEditorVm::new(tenant);
    vm.load();
    vm.watch_template_toggles();

    view! {
        <div class="standards-editor">
            {move || match vm.record.get() {
                RecordLoad::Loading => skeleton().into_any(),
                RecordLoad::Failed(e) => view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <div>{icon("warning")} " Failed to load standards: " {e}</div>
                    </MessageBar>
                }
                .into_any(),
                RecordLoad::Ready(record) => {
                    let banner = applied_banner(record.as_ref());
                    view! {
                        <p class="standards-editor__banner">{banner}</p>
                        <StandardsForm vm=vm />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

fn skeleton() -> impl IntoView {
    view! {
        <div class="standards-editor__skeleton" aria-busy="true">
            {(0..SKELETON_LINES)
                .map(|_| view! { <div class="skeleton-line"></div> })
                .collect_view()}
        </div>
    }
}

#[component]
fn StandardsForm(vm: StandardsEditorVm) -> impl IntoView {
    let is_saving = move || vm.save.with(|s| s.is_in_flight());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command();
    };

    view! {
        <form class="standards-form" on:submit=on_submit>
            {vm
                .schema
                .sections()
                .iter()
                .map(|section| view! { <FormSectionView vm=vm section=section /> })
                .collect_view()}

            <div class="details-actions">
                <button class="button button--primary" type="submit" disabled=is_saving>
                    {icon("save")}
                    " Submit"
                </button>
                <Show when=is_saving>
                    <Spinner size=SpinnerSize::Small />
                </Show>
            </div>

            {move || vm.save.with(|s| s.succeeded_message().map(str::to_string)).map(|message| view! {
                <MessageBar intent=MessageBarIntent::Success>
                    <div>{icon("check")} " " {message}</div>
                </MessageBar>
            })}
            {move || vm.save.with(|s| s.error().map(str::to_string)).map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <div>{icon("warning")} " Failed to save standards: " {e}</div>
                </MessageBar>
            })}
        </form>

        // outside the form so its button never submits
        <Show when=move || vm.is_applied()>
            <DeleteStandardAction tenant=vm.tenant.get_value() />
        </Show>
    }
}
