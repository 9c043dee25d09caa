//! Health summary: badge strip plus embedding-model metadata.

use leptos::prelude::*;

use crate::state::health::{
    HealthState, HealthView, badge_rows, docs_indexed_label, embedding_model_label,
};

/// Renders the current health view: a notice line, or the badge strip with
/// model metadata for a live snapshot.
#[component]
pub fn HealthPanel() -> impl IntoView {
    let health = expect_context::<RwSignal<HealthState>>();

    move || match health.get().view {
        HealthView::Notice(message) => {
            let class = format!("status-line {}", message.css_class());
            view! { <p class=class>{message.text}</p> }.into_any()
        }
        HealthView::Ready(snapshot) => {
            let model = embedding_model_label(&snapshot);
            let docs = docs_indexed_label(&snapshot);
            let ocr_hint = (!snapshot.ocr).then(|| {
                view! {
                    <p class="hint">
                        "OCR not detected. Install Tesseract to extract text from scans."
                    </p>
                }
            });
            view! {
                <div class="health-panel">
                    <div class="health-panel__badges">
                        {badge_rows(&snapshot)
                            .into_iter()
                            .map(|(label, ok)| {
                                let class = if ok { "badge badge--ok" } else { "badge badge--warn" };
                                let text = format!("{} {label}", if ok { "✅" } else { "⚠️" });
                                view! { <span class=class>{text}</span> }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <p class="health-panel__meta">
                        "Embedding model: " <code>{model}</code>
                        " • Docs indexed: " <strong>{docs}</strong>
                    </p>
                    {ocr_hint}
                </div>
            }
            .into_any()
        }
    }
}
