//! Client-side application state.
//!
//! DESIGN
//! ======
//! State is split per panel (`settings`, `health`, `projects`, `ingest`,
//! `ask`) so components depend on small focused models. Each model is a
//! plain struct with pure transition functions; Leptos signals wrap them
//! only at the component layer, which keeps the logic unit-testable without
//! a browser. Fetching states carry a generation counter: `begin()` bumps it
//! and `complete()` discards results from superseded requests.

pub mod ask;
pub mod health;
pub mod ingest;
pub mod projects;
pub mod settings;
pub mod status;
