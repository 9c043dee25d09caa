//! Rendered answer: body text, retrieval footnote, and cited source pages
//! with thumbnail previews.

use leptos::prelude::*;

use crate::net::api::preview_url;
use crate::net::types::Citation;
use crate::state::ask::{AskState, answer_text, citation_label, used_chunks_label};
use crate::state::settings::SettingsState;

/// Renders the current answer, if any. The whole view is replaced when a new
/// ask resolves; nothing renders while the area is cleared.
#[component]
pub fn AnswerView() -> impl IntoView {
    let settings = expect_context::<RwSignal<SettingsState>>();
    let ask = expect_context::<RwSignal<AskState>>();

    move || {
        let state = ask.get();
        let payload = state.answer?;
        let project_id = state.answer_project;
        let base = settings.with(|settings| settings.api_base.clone());

        let body = answer_text(&payload).to_owned();
        let footnote = used_chunks_label(&payload)
            .map(|label| view! { <p class="answer__meta">{label}</p> });
        let citations = if payload.citations.is_empty() {
            view! {
                <p class="hint">"No citations were returned for this answer."</p>
            }
            .into_any()
        } else {
            view! {
                <div class="answer__citations">
                    <h4>"Citations"</h4>
                    {payload
                        .citations
                        .into_iter()
                        .map(|citation| {
                            view! {
                                <CitationCard
                                    citation=citation
                                    base=base.clone()
                                    project_id=project_id.clone()
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any()
        };

        Some(view! {
            <div class="answer">
                <h3>"Answer"</h3>
                <p class="answer__text">{body}</p>
                {footnote}
                {citations}
            </div>
        })
    }
}

/// One citation: its label plus the page preview. A failed image load swaps
/// the preview for a local hint without touching the other citations.
#[component]
fn CitationCard(citation: Citation, base: String, project_id: String) -> impl IntoView {
    let preview_failed = RwSignal::new(false);

    let label = citation_label(&citation);
    let alt = format!("{} page {}", citation.source, citation.page);
    let src = preview_url(
        &base,
        &citation.source,
        citation.page,
        &project_id,
        cache_buster(),
    );

    view! {
        <figure class="citation">
            <figcaption class="citation__text">{label}</figcaption>
            {move || {
                if preview_failed.get() {
                    view! { <p class="hint">"Preview unavailable (check API logs)."</p> }
                        .into_any()
                } else {
                    view! {
                        <img
                            class="citation__preview"
                            src=src.clone()
                            alt=alt.clone()
                            on:error=move |_| preview_failed.set(true)
                        />
                    }
                        .into_any()
                }
            }}
        </figure>
    }
}

/// Millisecond clock tick appended to preview URLs so re-asks bypass any
/// intermediary image cache.
fn cache_buster() -> u64 {
    #[cfg(feature = "web")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "web"))]
    {
        0
    }
}
