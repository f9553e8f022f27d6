use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn default_state_has_no_banner() {
    let state = UiState::default();
    assert!(state.banner.is_none());
}

// =============================================================
// announce / clear_if
// =============================================================

#[test]
fn announce_sets_banner_with_severity() {
    let mut state = UiState::default();
    let seq = state.announce(Severity::Success, "Project created.");
    let banner = state.banner.as_ref().expect("banner");
    assert_eq!(banner.seq, seq);
    assert_eq!(banner.severity, Severity::Success);
    assert_eq!(banner.text, "Project created.");
}

#[test]
fn announce_replaces_current_banner() {
    let mut state = UiState::default();
    let first = state.announce(Severity::Info, "Signing in...");
    let second = state.announce(Severity::Error, "Sign in failed.");
    assert_ne!(first, second);
    assert_eq!(state.banner.as_ref().map(|b| b.seq), Some(second));
}

#[test]
fn clear_if_removes_matching_banner() {
    let mut state = UiState::default();
    let seq = state.announce(Severity::Info, "Signed out.");
    assert!(state.clear_if(seq));
    assert!(state.banner.is_none());
}

#[test]
fn stale_clear_leaves_newer_banner() {
    let mut state = UiState::default();
    let stale = state.announce(Severity::Info, "Signing in...");
    let newer = state.announce(Severity::Error, "Sign in failed.");
    assert!(!state.clear_if(stale));
    assert_eq!(state.banner.as_ref().map(|b| b.seq), Some(newer));
}

#[test]
fn clear_if_on_empty_state_is_noop() {
    let mut state = UiState::default();
    assert!(!state.clear_if(0));
}

// =============================================================
// Severity labels
// =============================================================

#[test]
fn severity_labels_match_css_suffixes() {
    assert_eq!(Severity::Success.label(), "success");
    assert_eq!(Severity::Error.label(), "error");
    assert_eq!(Severity::Info.label(), "info");
}
