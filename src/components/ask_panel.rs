//! Question form: project id, question text, and the result count.

use leptos::prelude::*;

use crate::components::answer_view::AnswerView;
use crate::components::status_line::StatusLine;
use crate::state::ask::{AskState, MAX_TOP_K, MIN_TOP_K, clamp_top_k, validate_ask};
use crate::state::settings::SettingsState;

/// Ask panel. Submitting clears the previous answer, disables and relabels
/// the button, and renders the new answer (or the failure) when the call
/// resolves.
#[component]
pub fn AskPanel() -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let ask = expect_context::<RwSignal<AskState>>();

    let question = RwSignal::new(String::new());
    let top_k = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !settings.with(SettingsState::has_api_base) {
            ask.update(|state| state.fail_local("Set API base URL before asking questions."));
            return;
        }
        let project_id = settings.with(|state| state.project_id.trim().to_owned());
        let question_text = question.with(|text| text.trim().to_owned());
        if let Err(message) = validate_ask(&project_id, &question_text) {
            ask.update(|state| state.fail_local(message));
            return;
        }
        #[cfg(feature = "web")]
        {
            let mut generation = 0;
            ask.update(|state| generation = state.begin(&project_id));
            let request = crate::net::types::AskRequest {
                project_id,
                question: question_text,
                top_k: clamp_top_k(&top_k.get()),
            };
            let base = settings.with(|state| state.api_base.clone());
            wasm_bindgen_futures::spawn_local(async move {
                let result = crate::net::api::post_ask(&base, &request).await;
                if let Err(message) = &result {
                    log::warn!("ask failed: {message}");
                }
                let mut succeeded = false;
                ask.update(|state| succeeded = state.complete(generation, result));
                if succeeded {
                    crate::app::update_project_id(settings, &request.project_id);
                }
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = clamp_top_k(&top_k.get());
        }
    };

    view! {
        <section class="panel ask-panel">
            <h2>"Ask your documents"</h2>
            <form class="ask-panel__form" on:submit=on_submit>
                <label class="field">
                    "Project ID"
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || settings.with(|state| state.project_id.clone())
                        on:change=move |ev| {
                            crate::app::update_project_id(settings, &event_target_value(&ev));
                        }
                    />
                </label>
                <label class="field">
                    "Your question"
                    <input
                        class="field__input"
                        type="text"
                        placeholder="When is substantial completion required?"
                        prop:value=move || question.get()
                        on:input=move |ev| question.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Top K"
                    <input
                        class="field__input field__input--narrow"
                        type="number"
                        min=MIN_TOP_K.to_string()
                        max=MAX_TOP_K.to_string()
                        placeholder="5"
                        prop:value=move || top_k.get()
                        on:input=move |ev| top_k.set(event_target_value(&ev))
                    />
                </label>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || ask.get().submitting
                >
                    {move || if ask.get().submitting { "Querying…" } else { "Ask" }}
                </button>
            </form>
            <StatusLine message=Signal::derive(move || ask.get().status)/>
            <AnswerView/>
        </section>
    }
}
