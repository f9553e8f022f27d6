use super::*;

fn principal() -> Principal {
    Principal {
        uid: "u-1".to_owned(),
        email: "a@b.com".to_owned(),
        display_name: None,
    }
}

fn session() -> Session {
    Session {
        principal: principal(),
        refresh_token: "rt-1".to_owned(),
    }
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn default_state_is_loading() {
    let state = SessionState::default();
    assert!(state.is_loading());
    assert!(state.principal().is_none());
    assert!(state.refresh_token().is_none());
}

#[test]
fn authenticated_state_exposes_principal_and_token() {
    let state = SessionState::authenticated(session());
    assert!(!state.is_loading());
    assert_eq!(state.principal().map(|p| p.uid.as_str()), Some("u-1"));
    assert_eq!(state.refresh_token(), Some("rt-1"));
}

#[test]
fn rotate_refresh_token_replaces_stored_token() {
    let mut state = SessionState::authenticated(session());
    state.rotate_refresh_token("rt-2".to_owned());
    assert_eq!(state.refresh_token(), Some("rt-2"));
}

#[test]
fn rotate_refresh_token_is_noop_when_signed_out() {
    let mut state = SessionState::unauthenticated();
    state.rotate_refresh_token("rt-2".to_owned());
    assert!(state.refresh_token().is_none());
}

// =============================================================
// phase_effect transitions
// =============================================================

#[test]
fn loading_to_authenticated_redirects_home() {
    let effect = phase_effect(
        &SessionPhase::Loading,
        &SessionPhase::Authenticated(session()),
    );
    assert_eq!(effect.navigate_to, Some("/home"));
    assert_eq!(
        effect.banner,
        Some((Severity::Success, "Signed in. Redirecting..."))
    );
}

#[test]
fn unauthenticated_to_authenticated_redirects_home() {
    let effect = phase_effect(
        &SessionPhase::Unauthenticated,
        &SessionPhase::Authenticated(session()),
    );
    assert_eq!(effect.navigate_to, Some("/home"));
}

#[test]
fn loading_to_unauthenticated_shows_login_prompt() {
    let effect = phase_effect(&SessionPhase::Loading, &SessionPhase::Unauthenticated);
    assert_eq!(effect.navigate_to, Some("/"));
    assert_eq!(
        effect.banner,
        Some((Severity::Info, "No user signed in. Please log in."))
    );
}

#[test]
fn sign_out_returns_to_login_with_note() {
    let effect = phase_effect(
        &SessionPhase::Authenticated(session()),
        &SessionPhase::Unauthenticated,
    );
    assert_eq!(effect.navigate_to, Some("/"));
    assert_eq!(effect.banner, Some((Severity::Info, "Signed out.")));
}

#[test]
fn repeated_sign_out_is_silent() {
    let effect = phase_effect(&SessionPhase::Unauthenticated, &SessionPhase::Unauthenticated);
    assert_eq!(effect, PhaseEffect::default());
}

#[test]
fn token_rotation_produces_no_effect() {
    let mut rotated = session();
    rotated.refresh_token = "rt-2".to_owned();
    let effect = phase_effect(
        &SessionPhase::Authenticated(session()),
        &SessionPhase::Authenticated(rotated),
    );
    assert_eq!(effect, PhaseEffect::default());
}
