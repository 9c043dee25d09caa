//! Tracked-project listing with a manual refresh.

use leptos::prelude::*;

use crate::app::reload_projects;
use crate::state::projects::{
    ProjectsState, ProjectsView, chunk_count_label, doc_count_label, doc_list_label,
};
use crate::state::settings::SettingsState;

/// Project listing panel. Every load fully replaces the prior rendering; a
/// failed load replaces it with the error line.
#[component]
pub fn ProjectsPanel() -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let projects = expect_context::<RwSignal<ProjectsState>>();

    view! {
        <section class="panel projects-panel">
            <header class="projects-panel__header">
                <h2>"Tracked projects"</h2>
                <button class="btn" on:click=move |_| reload_projects(settings, projects)>
                    "Refresh"
                </button>
            </header>
            {move || match projects.get().view {
                ProjectsView::Notice(text) => view! { <p class="hint">{text}</p> }.into_any(),
                ProjectsView::Loaded(items) if items.is_empty() => {
                    view! {
                        <p class="hint">"No tracked projects yet. Ingest docs to populate the index."</p>
                    }
                        .into_any()
                }
                ProjectsView::Loaded(items) => {
                    view! {
                        <ul class="projects-panel__rows">
                            {items
                                .into_iter()
                                .map(|project| {
                                    let docs = doc_count_label(&project);
                                    let chunks = chunk_count_label(&project);
                                    let doc_list = doc_list_label(&project);
                                    view! {
                                        <li class="project-row">
                                            <span class="project-row__id">{project.project_id}</span>
                                            <span class="project-row__docs">{docs}</span>
                                            <span class="project-row__chunks">{chunks}</span>
                                            <span class="project-row__doc-list">{doc_list}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
