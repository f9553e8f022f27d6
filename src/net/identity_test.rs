use super::*;

// =============================================================
// parse_provider_error_code
// =============================================================

#[test]
fn parses_nested_error_message() {
    let body = r#"{"error":{"code":400,"message":"EMAIL_NOT_FOUND"}}"#;
    assert_eq!(parse_provider_error_code(body), Some("EMAIL_NOT_FOUND".to_owned()));
}

#[test]
fn no_code_for_malformed_body() {
    assert_eq!(parse_provider_error_code("504 Gateway Timeout"), None);
    assert_eq!(parse_provider_error_code(r#"{"error":"flat"}"#), None);
}

// =============================================================
// friendly_auth_message
// =============================================================

#[test]
fn maps_known_codes() {
    assert_eq!(
        friendly_auth_message(Some("EMAIL_NOT_FOUND")),
        "No account exists for that email."
    );
    assert_eq!(
        friendly_auth_message(Some("INVALID_LOGIN_CREDENTIALS")),
        "Incorrect email or password."
    );
    assert_eq!(
        friendly_auth_message(Some("INVALID_REFRESH_TOKEN")),
        "Your session has expired. Please sign in again."
    );
}

#[test]
fn matches_codes_with_suffix() {
    assert_eq!(
        friendly_auth_message(Some("TOO_MANY_ATTEMPTS_TRY_LATER : try again in a bit")),
        "Too many attempts. Try again later."
    );
}

#[test]
fn unknown_code_is_echoed() {
    assert_eq!(
        friendly_auth_message(Some("OPERATION_NOT_ALLOWED")),
        "Sign in failed (OPERATION_NOT_ALLOWED)."
    );
}

#[test]
fn missing_code_is_generic() {
    assert_eq!(friendly_auth_message(None), "Sign in failed.");
}

// =============================================================
// auth_error_from_body
// =============================================================

#[test]
fn auth_error_carries_friendly_message() {
    let body = r#"{"error":{"message":"USER_DISABLED"}}"#;
    assert_eq!(
        auth_error_from_body(body),
        ClientError::Auth("This account has been disabled.".to_owned())
    );
}
