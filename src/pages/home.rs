//! The single Docpilot page: endpoint settings, ingestion, tracked projects,
//! and question answering.

use leptos::prelude::*;

use crate::components::ask_panel::AskPanel;
use crate::components::ingest_panel::IngestPanel;
use crate::components::projects_panel::ProjectsPanel;
use crate::components::settings_panel::SettingsPanel;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <header class="home-page__header">
                <h1>"Docpilot"</h1>
                <p class="home-page__tagline">
                    "Ingest project documents and ask questions against their index."
                </p>
            </header>
            <div class="home-page__grid">
                <SettingsPanel/>
                <IngestPanel/>
                <ProjectsPanel/>
                <AskPanel/>
            </div>
        </main>
    }
}
