//! Network layer: wire types for the Docpilot API and the HTTP helpers that
//! fetch them.

pub mod api;
pub mod types;
