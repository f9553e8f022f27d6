use super::*;

// =============================================================
// parse_project_list
// =============================================================

#[test]
fn parses_array_of_projects() {
    let value = serde_json::json!([
        {"id":"p1","name":"Plant A","description":"floor sensors","created_at":"2025-11-01T10:00:00Z"},
        {"id":"p2","name":"Plant B","description":null,"created_at":"2025-11-02T10:00:00Z"}
    ]);
    let list = parse_project_list(value);
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, "p1");
    assert_eq!(list[0].description.as_deref(), Some("floor sensors"));
    assert_eq!(list[1].description, None);
}

#[test]
fn non_array_body_becomes_empty_list() {
    assert!(parse_project_list(serde_json::json!({"detail":"oops"})).is_empty());
    assert!(parse_project_list(serde_json::json!("projects")).is_empty());
    assert!(parse_project_list(serde_json::Value::Null).is_empty());
}

#[test]
fn undecodable_elements_are_skipped() {
    let value = serde_json::json!([
        {"id":"p1","name":"Plant A","created_at":"2025-11-01T10:00:00Z"},
        {"unexpected":true}
    ]);
    let list = parse_project_list(value);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "Plant A");
}

// =============================================================
// extract_generation_id
// =============================================================

#[test]
fn extracts_generation_id() {
    assert_eq!(
        extract_generation_id(r#"{"generation_id":"g1"}"#),
        Some("g1".to_owned())
    );
}

#[test]
fn rejects_missing_or_empty_generation_id() {
    assert_eq!(extract_generation_id(r#"{"generation_id":""}"#), None);
    assert_eq!(extract_generation_id(r#"{"id":"g1"}"#), None);
    assert_eq!(extract_generation_id("not json"), None);
}
