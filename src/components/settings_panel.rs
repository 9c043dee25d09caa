//! API endpoint configuration panel with the health summary.

use leptos::prelude::*;

use crate::app::{refresh_health, reload_projects};
use crate::components::health_panel::HealthPanel;
use crate::state::health::HealthState;
use crate::state::projects::ProjectsState;
use crate::state::settings::SettingsState;
use crate::state::status::StatusMessage;
use crate::util::storage::BrowserStore;

/// Endpoint panel. Saving a new base URL re-runs the health check and the
/// project listing; clearing it leaves the health area on the cleared hint.
#[component]
pub fn SettingsPanel() -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let health = expect_context::<RwSignal<HealthState>>();
    let projects = expect_context::<RwSignal<ProjectsState>>();

    let field = RwSignal::new(String::new());

    // Reflect the configured (normalized) base back into the input on
    // startup and after each save.
    Effect::new(move || field.set(settings.with(|state| state.api_base.clone())));

    let do_save = move || {
        let candidate = field.get();
        let mut store = BrowserStore;
        let mut outcome = Ok(());
        settings.update(|state| outcome = state.set_api_base(&candidate, &mut store));
        match outcome {
            Err(message) => health.update(|state| state.notice(StatusMessage::error(message))),
            Ok(()) => {
                if settings.with(SettingsState::has_api_base) {
                    refresh_health(settings, health);
                    reload_projects(settings, projects);
                } else {
                    health.update(|state| {
                        state.notice(StatusMessage::info(
                            "Cleared API base. Set a new endpoint to continue.",
                        ));
                    });
                }
            }
        }
    };

    view! {
        <section class="panel settings-panel">
            <h2>"API endpoint"</h2>
            <div class="settings-panel__row">
                <input
                    class="settings-panel__input"
                    type="text"
                    placeholder="http://localhost:8000"
                    prop:value=move || field.get()
                    on:input=move |ev| field.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            do_save();
                        }
                    }
                />
                <button class="btn btn--primary" on:click=move |_| do_save()>
                    "Save"
                </button>
            </div>
            <HealthPanel/>
        </section>
    }
}
