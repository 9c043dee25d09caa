//! Root application component, shared state contexts, and startup
//! resolution.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::ask::AskState;
use crate::state::health::HealthState;
use crate::state::ingest::IngestState;
use crate::state::projects::ProjectsState;
use crate::state::settings::SettingsState;
use crate::util::storage::{self, BrowserStore, KeyValueStore};

/// Root application component.
///
/// Provides the per-panel state contexts, resolves the startup settings, and
/// kicks the initial health check and project listing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let settings = RwSignal::new(SettingsState::default());
    let health = RwSignal::new(HealthState::default());
    let projects = RwSignal::new(ProjectsState::default());
    let ingest = RwSignal::new(IngestState::default());
    let ask = RwSignal::new(AskState::default());

    provide_context(settings);
    provide_context(health);
    provide_context(projects);
    provide_context(ingest);
    provide_context(ask);

    bootstrap(settings, health, projects);

    view! {
        <Title text="Docpilot"/>
        <HomePage/>
    }
}

/// Resolve the startup API base (query override → persisted → default),
/// restore the persisted project id, and start the initial fetches.
fn bootstrap(
    settings: RwSignal<SettingsState>,
    health: RwSignal<HealthState>,
    projects: RwSignal<ProjectsState>,
) {
    let mut store = BrowserStore;
    let stored_base = store.get(storage::API_BASE_KEY);
    let query_override = crate::util::query::current_api_override();
    let resolved =
        SettingsState::resolve_startup_base(query_override.as_deref(), stored_base.as_deref());

    settings.update(|state| {
        let _ = state.set_api_base(&resolved, &mut store);
        if let Some(project_id) = store.get(storage::PROJECT_ID_KEY) {
            state.set_project_id(&project_id, &mut store);
        }
    });
    #[cfg(feature = "web")]
    log::info!("api base resolved to {resolved}");

    if settings.with(SettingsState::has_api_base) {
        refresh_health(settings, health);
        reload_projects(settings, projects);
    }
}

/// Ping `/healthz` and swap the health display when the response lands.
pub(crate) fn refresh_health(settings: RwSignal<SettingsState>, health: RwSignal<HealthState>) {
    if !settings.with(SettingsState::has_api_base) {
        health.update(HealthState::reset_unconfigured);
        return;
    }
    let mut generation = 0;
    health.update(|state| generation = state.begin());
    #[cfg(feature = "web")]
    {
        let base = settings.with(|state| state.api_base.clone());
        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::net::api::fetch_health(&base).await;
            if let Err(message) = &result {
                log::warn!("health check failed: {message}");
            }
            health.update(|state| {
                state.complete(generation, result);
            });
        });
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = generation;
    }
}

/// Fetch `/projects` and replace the listing when the response lands.
pub(crate) fn reload_projects(
    settings: RwSignal<SettingsState>,
    projects: RwSignal<ProjectsState>,
) {
    if !settings.with(SettingsState::has_api_base) {
        projects.update(ProjectsState::reset_unconfigured);
        return;
    }
    let mut generation = 0;
    projects.update(|state| generation = state.begin());
    #[cfg(feature = "web")]
    {
        let base = settings.with(|state| state.api_base.clone());
        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::net::api::fetch_projects(&base).await;
            if let Err(message) = &result {
                log::warn!("project listing failed: {message}");
            }
            projects.update(|state| {
                state.complete(generation, result);
            });
        });
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = generation;
    }
}

/// Write the shared project id (both forms and persistence) from any panel.
pub(crate) fn update_project_id(settings: RwSignal<SettingsState>, value: &str) {
    let mut store = BrowserStore;
    settings.update(|state| state.set_project_id(value, &mut store));
}
