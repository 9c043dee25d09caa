//! Inline status line rendered under each form.

use leptos::prelude::*;

use crate::state::status::StatusMessage;

/// Renders an optional status message with its severity class; renders
/// nothing while there is no message.
#[component]
pub fn StatusLine(#[prop(into)] message: Signal<Option<StatusMessage>>) -> impl IntoView {
    move || {
        message.get().map(|message| {
            let class = format!("status-line {}", message.css_class());
            view! { <p class=class>{message.text}</p> }
        })
    }
}
