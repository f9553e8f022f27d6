use super::*;

// =============================================================
// extract_detail
// =============================================================

#[test]
fn extract_detail_reads_detail_field() {
    let body = r#"{"detail":"Email already registered"}"#;
    assert_eq!(extract_detail(body), Some("Email already registered".to_owned()));
}

#[test]
fn extract_detail_none_for_missing_field() {
    assert_eq!(extract_detail(r#"{"message":"nope"}"#), None);
}

#[test]
fn extract_detail_none_for_non_json() {
    assert_eq!(extract_detail("Internal Server Error"), None);
}

#[test]
fn extract_detail_none_for_non_string_detail() {
    assert_eq!(extract_detail(r#"{"detail":{"code":42}}"#), None);
}

// =============================================================
// ClientError::backend_from_body
// =============================================================

#[test]
fn backend_from_body_prefers_server_detail() {
    let err = ClientError::backend_from_body(r#"{"detail":"Name taken"}"#, "Failed to create project.");
    assert_eq!(err, ClientError::Backend("Name taken".to_owned()));
}

#[test]
fn backend_from_body_falls_back_to_generic() {
    let err = ClientError::backend_from_body("<html>502</html>", "Failed to create project.");
    assert_eq!(err, ClientError::Backend("Failed to create project.".to_owned()));
}

// =============================================================
// user_message
// =============================================================

#[test]
fn download_message_includes_status_and_body() {
    let err = ClientError::Download {
        status: 403,
        body: "forbidden".to_owned(),
    };
    assert_eq!(err.user_message(), "Download failed (403): forbidden");
}

#[test]
fn download_message_omits_empty_body() {
    let err = ClientError::Download {
        status: 500,
        body: String::new(),
    };
    assert_eq!(err.user_message(), "Download failed (500).");
}

#[test]
fn network_message_is_generic() {
    let err = ClientError::Network("fetch aborted".to_owned());
    assert_eq!(err.user_message(), "Network error. Please try again.");
}

#[test]
fn validation_message_passes_through() {
    let err = ClientError::Validation("Project name required.".to_owned());
    assert_eq!(err.user_message(), "Project name required.");
}
