use super::*;

// =============================================================
// validate_credentials
// =============================================================

#[test]
fn rejects_empty_email() {
    assert_eq!(
        validate_credentials("", "secret123"),
        Err(ClientError::Validation("Email and password required.".to_owned()))
    );
    assert!(validate_credentials("   ", "secret123").is_err());
}

#[test]
fn rejects_empty_password() {
    assert!(validate_credentials("a@b.com", "").is_err());
}

#[test]
fn accepts_non_empty_credentials() {
    assert_eq!(validate_credentials("a@b.com", "secret123"), Ok(()));
}

// =============================================================
// normalize_display_name
// =============================================================

#[test]
fn blank_display_name_becomes_none() {
    assert_eq!(normalize_display_name(""), None);
    assert_eq!(normalize_display_name("   "), None);
}

#[test]
fn display_name_is_trimmed() {
    assert_eq!(normalize_display_name("  Ada  "), Some("Ada".to_owned()));
}

// =============================================================
// record / session conversions
// =============================================================

fn record() -> SessionRecord {
    SessionRecord {
        uid: "u-1".to_owned(),
        email: "a@b.com".to_owned(),
        display_name: Some("Ada".to_owned()),
        refresh_token: "rt-1".to_owned(),
    }
}

#[test]
fn record_round_trips_through_session_state() {
    let state = SessionState::authenticated(record_to_session(record()));
    assert_eq!(session_record(&state), Some(record()));
}

#[test]
fn no_record_for_unauthenticated_state() {
    assert_eq!(session_record(&SessionState::unauthenticated()), None);
    assert_eq!(session_record(&SessionState::default()), None);
}
