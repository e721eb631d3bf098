//! Parameterised renderer of one schema section and its fields.

use super::view_model::StandardsEditorVm;
use crate::shared::components::ui::{Checkbox, Input, Select};
use crate::shared::icons::icon;
use contracts::domain::a001_tenant_standards::{
    FieldDescriptor, FieldKind, FormSection, LaneState, SelectedOption, TemplateKind,
};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn FormSectionView(vm: StandardsEditorVm, section: &'static FormSection) -> impl IntoView {
    view! {
        <section class="standards-form__section">
            <h4 class="standards-form__section-title">{section.title}</h4>
            <div class="standards-form__fields">
                {section
                    .fields
                    .iter()
                    .map(|field| view! { <FieldView vm=vm field=field /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// One field, rendered only while its owner toggle allows it
#[component]
fn FieldView(vm: StandardsEditorVm, field: &'static FieldDescriptor) -> impl IntoView {
    let is_visible = move || vm.form.with(|form| field.is_visible(form));

    view! {
        <Show when=is_visible>
            <div class="standards-form__field">{field_control(vm, field)}</div>
        </Show>
    }
}

fn field_control(vm: StandardsEditorVm, field: &'static FieldDescriptor) -> AnyView {
    let path = field.path.as_str();
    let input_id = format!("std-{}", path.replace('.', "-"));

    match &field.kind {
        FieldKind::Toggle => view! {
            <Checkbox
                id=input_id
                switch=true
                label=field.label.clone()
                checked=Signal::derive(move || vm.form.with(|f| f.toggle(path).is_enabled()))
                on_change=Callback::new(move |on| vm.set_toggle(path, on))
            />
        }
        .into_any(),
        FieldKind::Text => view! {
            <Input
                id=input_id
                label=field.label.clone()
                value=Signal::derive(move || vm.form.with(|f| f.text(path)))
                on_input=Callback::new(move |text| vm.set_text(path, text))
            />
        }
        .into_any(),
        FieldKind::Select(values) => {
            let options = values
                .iter()
                .map(|o| (o.value.to_string(), o.label.to_string()))
                .collect::<Vec<_>>();
            view! {
                <Select
                    id=input_id
                    label=field.label.clone()
                    value=Signal::derive(move || vm.form.with(|f| f.text(path)))
                    on_change=Callback::new(move |value| vm.set_text(path, value))
                    options=options
                />
            }
            .into_any()
        }
        FieldKind::TemplatePicker(kind) => {
            view! { <TemplatePicker vm=vm kind=*kind field=field /> }.into_any()
        }
    }
}

/// Multi-select over the template references of one lane
#[component]
fn TemplatePicker(
    vm: StandardsEditorVm,
    kind: TemplateKind,
    field: &'static FieldDescriptor,
) -> impl IntoView {
    let path = field.path.as_str();

    view! {
        <div class="form__group">
            <span class="form__label">{field.label.clone()}</span>
            {move || match vm.lane(kind) {
                LaneState::Uninitialized | LaneState::Loading => view! {
                    <Flex gap=FlexGap::Small style="align-items: center;">
                        <Spinner size=SpinnerSize::Small />
                        <span>"Loading templates..."</span>
                    </Flex>
                }
                .into_any(),
                LaneState::Failed(e) => view! {
                    <MessageBar intent=MessageBarIntent::Warning>
                        <div>{icon("warning")} " Could not load templates: " {e}</div>
                    </MessageBar>
                }
                .into_any(),
                LaneState::Loaded(items) if items.is_empty() => view! {
                    <span class="standards-form__hint">"No templates available"</span>
                }
                .into_any(),
                LaneState::Loaded(items) => items
                    .into_iter()
                    .map(|item| {
                        let option = SelectedOption {
                            value: item.id.clone(),
                            label: item.display_name.clone(),
                        };
                        let value = item.id;
                        view! {
                            <Checkbox
                                label=item.display_name
                                checked=Signal::derive(move || {
                                    vm.form.with(|f| f.is_selected(path, &value))
                                })
                                on_change=Callback::new(move |on| {
                                    vm.set_selected(path, option.clone(), on)
                                })
                            />
                        }
                    })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
