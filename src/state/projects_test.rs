use super::*;

fn project(id: &str) -> Project {
    Project {
        id: id.to_owned(),
        name: format!("Project {id}"),
        description: None,
        created_at: "2025-11-01T10:00:00Z".to_owned(),
    }
}

// =============================================================
// ProjectsState defaults
// =============================================================

#[test]
fn default_state_is_empty_and_idle() {
    let state = ProjectsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(!state.create_pending);
}

// =============================================================
// Refetch policy: once per distinct principal
// =============================================================

#[test]
fn needs_fetch_before_first_fetch() {
    let state = ProjectsState::default();
    assert!(state.needs_fetch("u-1"));
}

#[test]
fn no_refetch_for_same_principal() {
    let mut state = ProjectsState::default();
    state.mark_fetched("u-1".to_owned());
    assert!(!state.needs_fetch("u-1"));
}

#[test]
fn refetch_when_principal_changes() {
    let mut state = ProjectsState::default();
    state.mark_fetched("u-1".to_owned());
    assert!(state.needs_fetch("u-2"));
}

#[test]
fn reset_marker_forces_refetch_but_keeps_list() {
    let mut state = ProjectsState::default();
    state.mark_fetched("u-1".to_owned());
    state.replace(vec![project("p1")]);
    state.reset_fetch_marker();
    assert!(state.needs_fetch("u-1"));
    assert_eq!(state.items.len(), 1);
}

// =============================================================
// List updates
// =============================================================

#[test]
fn replace_swaps_list_contents() {
    let mut state = ProjectsState::default();
    state.replace(vec![project("p1"), project("p2")]);
    state.replace(vec![project("p3")]);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "p3");
}

#[test]
fn prepend_puts_new_project_first() {
    let mut state = ProjectsState::default();
    state.replace(vec![project("p1")]);
    state.prepend(project("p2"));
    assert_eq!(state.items[0].id, "p2");
    assert_eq!(state.items[1].id, "p1");
}
