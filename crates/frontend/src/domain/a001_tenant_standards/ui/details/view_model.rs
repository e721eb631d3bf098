use crate::domain::a001_tenant_standards::api;
use contracts::domain::a001_tenant_standards::{
    encode_payload, ActionStatus, FormSchema, FormState, LaneState, SelectedOption,
    TemplateKind, TemplateLanes, TenantKey, TenantStandardsRecord, DEFAULT_SCHEMA,
};
use leptos::prelude::*;

/// Result of the tenant record fetch
#[derive(Debug, Clone, PartialEq)]
pub enum RecordLoad {
    Loading,
    /// `None` when the tenant never had a standard applied
    Ready(Option<TenantStandardsRecord>),
    Failed(String),
}

/// ViewModel for the standards editor form
#[derive(Clone, Copy)]
pub struct StandardsEditorVm {
    pub tenant: StoredValue<TenantKey>,
    pub schema: &'static FormSchema,
    pub record: RwSignal<RecordLoad>,
    pub form: RwSignal<FormState>,
    pub lanes: RwSignal<TemplateLanes>,
    pub save: RwSignal<ActionStatus>,
}

impl StandardsEditorVm {
    pub fn new(tenant: TenantKey) -> Self {
        Self {
            tenant: StoredValue::new(tenant),
            schema: &DEFAULT_SCHEMA,
            record: RwSignal::new(RecordLoad::Loading),
            form: RwSignal::new(FormState::new()),
            lanes: RwSignal::new(TemplateLanes::new()),
            save: RwSignal::new(ActionStatus::Idle),
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self.record.get(), RecordLoad::Ready(Some(ref r)) if r.is_applied())
    }

    /// Fetch the tenant's record and hydrate the form from element 0
    pub fn load(&self) {
        let vm = *self;
        let tenant = self.tenant.get_value();
        self.record.set(RecordLoad::Loading);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_tenant_standards(&tenant).await {
                Ok(records) => {
                    let first = records.into_iter().next();
                    log::debug!(
                        "standards for {}: {}",
                        tenant,
                        if first.is_some() { "applied" } else { "none" }
                    );
                    vm.form.set(FormState::hydrate(first.as_ref(), vm.schema));
                    vm.record.set(RecordLoad::Ready(first));
                }
                Err(e) => {
                    log::warn!("failed to load standards for {}: {}", tenant, e);
                    vm.record.set(RecordLoad::Failed(e.to_string()));
                }
            }
        });
    }

    /// Fetch template lists whenever their toggle is (or becomes) enabled.
    /// Covers toggles switched on by the user and those hydrated as enabled.
    pub fn watch_template_toggles(&self) {
        let vm = *self;
        Effect::new(move |_| {
            let pending = vm
                .form
                .with(|form| vm.lanes.with_untracked(|lanes| lanes.pending(form)));
            for kind in pending {
                vm.ensure_templates(kind);
            }
        });
    }

    fn ensure_templates(&self, kind: TemplateKind) {
        let mut claimed = false;
        self.lanes.update(|l| claimed = l.request(kind));
        if !claimed {
            return;
        }

        let lanes = self.lanes;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_templates(kind).await.map_err(|e| {
                log::warn!("failed to load {:?} templates: {}", kind, e);
                e.to_string()
            });
            lanes.update(|l| l.resolve(kind, result));
        });
    }

    pub fn lane(&self, kind: TemplateKind) -> LaneState {
        self.lanes.with(|l| l.state(kind))
    }

    pub fn set_toggle(&self, path: &str, enabled: bool) {
        self.form.update(|f| f.set_toggle(path, enabled));
    }

    pub fn set_text(&self, path: &str, text: String) {
        self.form.update(|f| f.set_text(path, text));
    }

    pub fn set_selected(&self, path: &str, option: SelectedOption, selected: bool) {
        self.form.update(|f| f.set_selected(path, option, selected));
    }

    /// Encode the visible form values and submit them
    pub fn save_command(&self) {
        let tenant = self.tenant.get_value();
        let payload = self
            .form
            .with_untracked(|form| encode_payload(self.schema, form, &tenant));
        let save = self.save;
        save.update(|s| s.start());
        log::info!("deploying standards for {} ({} keys)", tenant, payload.len());

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::deploy_standards(&payload).await;
            if let Err(ref e) = result {
                log::warn!("standards deploy failed: {}", e);
            }
            save.update(|s| s.finish(result));
        });
    }
}
