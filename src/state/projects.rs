#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::net::types::Project;

/// Project list state for the home view.
///
/// The list is a read-through copy of the server's response, refetched
/// exactly once per distinct authenticated principal. A failed fetch leaves
/// the previous list visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectsState {
    pub items: Vec<Project>,
    pub loading: bool,
    pub create_pending: bool,
    /// uid the list was last fetched for.
    fetched_for: Option<String>,
}

impl ProjectsState {
    /// Whether the list must be (re)fetched for this principal.
    pub fn needs_fetch(&self, uid: &str) -> bool {
        self.fetched_for.as_deref() != Some(uid)
    }

    /// Record that a fetch for this principal has been issued.
    pub fn mark_fetched(&mut self, uid: String) {
        self.fetched_for = Some(uid);
    }

    /// Forget the fetch marker so the next authenticated principal triggers
    /// a fresh fetch. Called when the home view mounts; the list itself is
    /// kept so the previous contents stay visible while reloading.
    pub fn reset_fetch_marker(&mut self) {
        self.fetched_for = None;
    }

    /// Replace the list with the server's response.
    pub fn replace(&mut self, items: Vec<Project>) {
        self.items = items;
    }

    /// Optimistically prepend a freshly created project. The server's
    /// canonical ordering is not reconciled until the next full fetch.
    pub fn prepend(&mut self, project: Project) {
        self.items.insert(0, project);
    }
}
