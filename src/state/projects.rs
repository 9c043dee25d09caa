#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::net::types::ProjectSummary;

/// What the listing area currently shows: a plain hint/progress/error line,
/// or the loaded rows. A fresh load fully replaces the prior rendering.
#[derive(Clone, Debug, PartialEq)]
pub enum ProjectsView {
    Notice(String),
    Loaded(Vec<ProjectSummary>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectsState {
    pub view: ProjectsView,
    generation: u64,
}

impl Default for ProjectsState {
    fn default() -> Self {
        Self {
            view: ProjectsView::Notice("Set API base URL to query tracked projects.".to_owned()),
            generation: 0,
        }
    }
}

impl ProjectsState {
    /// Start a load; returns the generation the in-flight request must
    /// present to [`Self::complete`].
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.view = ProjectsView::Notice("Loading projects…".to_owned());
        self.generation
    }

    /// Apply a finished request. Superseded generations are discarded;
    /// returns whether the result was applied.
    pub fn complete(
        &mut self,
        generation: u64,
        result: Result<Vec<ProjectSummary>, String>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.view = match result {
            Ok(items) => ProjectsView::Loaded(items),
            Err(message) => ProjectsView::Notice(format!("Failed to load projects: {message}")),
        };
        true
    }

    /// Back to the unconfigured hint. Bumps the generation so an in-flight
    /// load cannot overwrite it.
    pub fn reset_unconfigured(&mut self) {
        self.generation += 1;
        self.view = ProjectsView::Notice("Set API base URL to query tracked projects.".to_owned());
    }
}

pub fn doc_count_label(project: &ProjectSummary) -> String {
    format!("{} files", project.docs.len())
}

pub fn chunk_count_label(project: &ProjectSummary) -> String {
    format!("{} chunks", project.chunks)
}

/// Joined document names, or an em-dash placeholder for an empty set.
pub fn doc_list_label(project: &ProjectSummary) -> String {
    if project.docs.is_empty() {
        "—".to_owned()
    } else {
        project.docs.join(", ")
    }
}
