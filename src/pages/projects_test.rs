use super::*;

// =============================================================
// validate_project_name
// =============================================================

#[test]
fn blank_names_rejected_before_any_network_call() {
    for name in ["", "   ", "\t\n"] {
        assert_eq!(
            validate_project_name(name),
            Err(ClientError::Validation("Project name required.".to_owned()))
        );
    }
}

#[test]
fn valid_name_is_trimmed() {
    assert_eq!(validate_project_name("  Plant A  "), Ok("Plant A".to_owned()));
}

// =============================================================
// normalize_description
// =============================================================

#[test]
fn blank_description_becomes_none() {
    assert_eq!(normalize_description(""), None);
    assert_eq!(normalize_description("   "), None);
}

#[test]
fn description_is_trimmed() {
    assert_eq!(
        normalize_description("  floor sensors  "),
        Some("floor sensors".to_owned())
    );
}
