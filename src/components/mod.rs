//! Panel components for the single Docpilot page.

pub mod answer_view;
pub mod ask_panel;
pub mod health_panel;
pub mod ingest_panel;
pub mod projects_panel;
pub mod settings_panel;
pub mod status_line;
