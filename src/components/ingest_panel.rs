//! Document ingestion form: ZIP upload or server folder, OCR toggle.

use leptos::prelude::*;

use crate::components::status_line::StatusLine;
use crate::state::ingest::{IngestDraft, IngestState};
use crate::state::settings::SettingsState;

/// Ingest panel. The submit button is disabled and relabeled while an upload
/// is in flight; a successful ingest adopts the returned project id and
/// refreshes the project listing.
#[component]
pub fn IngestPanel() -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let ingest = expect_context::<RwSignal<IngestState>>();

    let folder = RwSignal::new(String::new());
    let ocr = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "web")]
    let projects = expect_context::<RwSignal<crate::state::projects::ProjectsState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !settings.with(SettingsState::has_api_base) {
            ingest.update(|state| state.fail_local("Set API base URL before ingesting documents."));
            return;
        }
        #[cfg(feature = "web")]
        {
            let upload = file_input
                .get()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let draft = IngestDraft {
                has_file: upload.is_some(),
                folder_path: folder.with(|path| path.trim().to_owned()),
                project_id: settings.with(|state| state.project_id.clone()),
                ocr: ocr.get(),
            };
            if let Err(message) = draft.validate() {
                ingest.update(|state| state.fail_local(message));
                return;
            }
            let mut generation = 0;
            ingest.update(|state| generation = state.begin());
            let base = settings.with(|state| state.api_base.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let result = crate::net::api::post_ingest(
                    &base,
                    upload.as_ref(),
                    (!draft.folder_path.is_empty()).then_some(draft.folder_path.as_str()),
                    (!draft.project_id.is_empty()).then_some(draft.project_id.as_str()),
                    draft.ocr,
                )
                .await;
                if let Err(message) = &result {
                    log::warn!("ingest failed: {message}");
                }
                let mut receipt = None;
                ingest.update(|state| receipt = state.complete(generation, result));
                if let Some(receipt) = receipt {
                    crate::app::update_project_id(settings, &receipt.project_id);
                    crate::app::reload_projects(settings, projects);
                }
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let draft = IngestDraft {
                has_file: false,
                folder_path: folder.with(|path| path.trim().to_owned()),
                project_id: settings.with(|state| state.project_id.clone()),
                ocr: ocr.get(),
            };
            if let Err(message) = draft.validate() {
                ingest.update(|state| state.fail_local(message));
            }
            let _ = file_input;
        }
    };

    view! {
        <section class="panel ingest-panel">
            <h2>"Ingest documents"</h2>
            <form class="ingest-panel__form" on:submit=on_submit>
                <label class="field">
                    "ZIP of PDFs"
                    <input class="field__input" type="file" accept=".zip" node_ref=file_input/>
                </label>
                <label class="field">
                    "OR server folder path"
                    <input
                        class="field__input"
                        type="text"
                        placeholder="/srv/project_docs"
                        prop:value=move || folder.get()
                        on:input=move |ev| folder.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Project ID (optional)"
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || settings.with(|state| state.project_id.clone())
                        on:change=move |ev| {
                            crate::app::update_project_id(settings, &event_target_value(&ev));
                        }
                    />
                </label>
                <label class="field field--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || ocr.get()
                        on:change=move |ev| ocr.set(event_target_checked(&ev))
                    />
                    "Enable OCR for scanned pages"
                </label>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || ingest.get().submitting
                >
                    {move || if ingest.get().submitting { "Sending…" } else { "Ingest" }}
                </button>
            </form>
            <StatusLine message=Signal::derive(move || ingest.get().status)/>
        </section>
    }
}
