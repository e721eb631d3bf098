//! Run-now and delete buttons, each with its own `ActionStatus`.

use crate::domain::a001_tenant_standards::api;
use crate::shared::icons::icon;
use contracts::domain::a001_tenant_standards::{ActionStatus, RunNowOutcome, TenantKey};
use leptos::prelude::*;
use thaw::*;

const RUN_NOW_PROMPT: &str = "Are you sure you want to run the standards now?\n\n\
     Please note: this runs every three hours automatically.";

const DELETE_PROMPT: &str = "Are you sure you want to delete this standard?";

fn ask(message: &str) -> bool {
    match web_sys::window() {
        Some(win) => win.confirm_with_message(message).unwrap_or(false),
        None => false,
    }
}

/// Spinner, warning or check icon for the state of an action
fn status_icon(status: &ActionStatus) -> AnyView {
    match status {
        ActionStatus::InFlight => view! { <Spinner size=SpinnerSize::Tiny /> }.into_any(),
        ActionStatus::Failed(e) => view! {
            <span class="action-status action-status--error" title=e.clone()>
                {icon("warning")}
            </span>
        }
        .into_any(),
        ActionStatus::Succeeded(_) => view! {
            <span class="action-status action-status--success">{icon("check")}</span>
        }
        .into_any(),
        ActionStatus::Idle | ActionStatus::Confirming => ().into_any(),
    }
}

#[component]
pub fn RunNowAction() -> impl IntoView {
    let status = RwSignal::new(ActionStatus::Idle);
    let outcome = RwSignal::new(None::<RunNowOutcome>);

    let handle_click = move |_| {
        status.update(|s| s.begin_confirm());
        let mut send = false;
        status.update(|s| send = s.confirm(ask(RUN_NOW_PROMPT)));
        if !send {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match api::run_standards_now().await {
                Ok(result) => {
                    if result.busy_message().is_some() {
                        log::info!("standards run already in progress");
                    }
                    let text = match &result {
                        RunNowOutcome::Started(t) | RunNowOutcome::AlreadyRunning(t) => t.clone(),
                    };
                    outcome.set(Some(result));
                    status.update(|s| s.finish::<String>(Ok(text)));
                }
                Err(e) => {
                    log::warn!("standards run failed to start: {}", e);
                    outcome.set(None);
                    status.update(|s| s.finish(Err(e)));
                }
            }
        });
    };

    view! {
        <div class="standards-action">
            <Button appearance=ButtonAppearance::Primary on_click=handle_click>
                {icon("play")}
                " Run Standards Now"
            </Button>
            {move || status.with(status_icon)}
            {move || {
                outcome
                    .get()
                    .and_then(|o| o.busy_message().map(str::to_string))
                    .map(|message| view! {
                        <MessageBar intent=MessageBarIntent::Info>
                            <div>{message}</div>
                        </MessageBar>
                    })
            }}
            {move || status.with(|s| s.error().map(str::to_string)).map(|e| view! {
                <span class="action-status__text action-status__text--error">{e}</span>
            })}
        </div>
    }
}

#[component]
pub fn DeleteStandardAction(tenant: TenantKey) -> impl IntoView {
    let status = RwSignal::new(ActionStatus::Idle);
    let tenant = StoredValue::new(tenant);

    let handle_click = move |_| {
        status.update(|s| s.begin_confirm());
        let mut send = false;
        status.update(|s| send = s.confirm(ask(DELETE_PROMPT)));
        if !send {
            return;
        }

        let tenant = tenant.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::remove_standard(&tenant).await;
            match &result {
                Ok(_) => log::info!("removed standard of {}", tenant),
                Err(e) => log::warn!("failed to remove standard of {}: {}", tenant, e),
            }
            status.update(|s| s.finish(result));
        });
    };

    view! {
        <div class="standards-action">
            <Button appearance=ButtonAppearance::Secondary on_click=handle_click>
                {icon("delete")}
                " Delete Standard"
            </Button>
            {move || status.with(status_icon)}
            {move || status.with(|s| s.succeeded_message().map(str::to_string)).map(|message| view! {
                <MessageBar intent=MessageBarIntent::Success>
                    <div>{message}</div>
                </MessageBar>
            })}
            {move || status.with(|s| s.error().map(str::to_string)).map(|e| view! {
                <span class="action-status__text action-status__text--error">{e}</span>
            })}
        </div>
    }
}
