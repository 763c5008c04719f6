use super::*;

// =============================================================
// StatusEnvelope
// =============================================================

#[test]
fn explicit_success_is_success() {
    let env: StatusEnvelope = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
    assert!(env.is_success());
}

#[test]
fn absent_status_counts_as_success() {
    let env: StatusEnvelope = serde_json::from_str("{}").unwrap();
    assert!(env.is_success());
}

#[test]
fn error_status_is_failure() {
    let env: StatusEnvelope =
        serde_json::from_str(r#"{"status": "error", "message": "seat taken"}"#).unwrap();
    assert!(!env.is_success());
    assert_eq!(env.message_or_default(), "seat taken");
}

#[test]
fn missing_message_falls_back_to_generic() {
    let env: StatusEnvelope = serde_json::from_str(r#"{"status": "error"}"#).unwrap();
    assert_eq!(env.message_or_default(), "operation failed");
}

// =============================================================
// StateSnapshot
// =============================================================

#[test]
fn snapshot_deserializes_full_payload() {
    let json = r#"{
        "seats": [
            {"row": 1, "col": 1, "cell_type": "seat",
             "student": {"id": 3, "name": "Ada"}},
            {"row": 1, "col": 2, "cell_type": "aisle"}
        ],
        "unseated": [{"id": 9, "name": "Grace", "score_display": "88"}],
        "unseated_count": 1,
        "suggestions": ["spread the back row out"]
    }"#;
    let snapshot: StateSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snapshot.seats.len(), 2);
    assert_eq!(snapshot.unseated.len(), 1);
    assert_eq!(snapshot.unseated_count, 1);
    assert_eq!(snapshot.suggestions, vec![Suggestion::Text("spread the back row out".to_owned())]);
}

#[test]
fn snapshot_tolerates_missing_optional_sections() {
    let snapshot: StateSnapshot = serde_json::from_str(r#"{"seats": []}"#).unwrap();
    assert!(snapshot.unseated.is_empty());
    assert_eq!(snapshot.unseated_count, 0);
    assert!(snapshot.suggestions.is_empty());
}

// =============================================================
// Suggestion
// =============================================================

#[test]
fn plain_string_parses_as_text() {
    let suggestion: Suggestion = serde_json::from_str(r#""swap rows 1 and 2""#).unwrap();
    assert_eq!(suggestion, Suggestion::Text("swap rows 1 and 2".to_owned()));
}

#[test]
fn object_parses_as_card() {
    let json = r#"{
        "message": "two leaders sit together",
        "action_label": "fix it",
        "action_url": "/api/classrooms/1/auto-fix",
        "ignore_label": "ignore",
        "ignore_url": "/api/classrooms/1/ignore",
        "type": "leader_conflict"
    }"#;
    let suggestion: Suggestion = serde_json::from_str(json).unwrap();
    let Suggestion::Card(card) = suggestion else {
        panic!("expected a card");
    };
    assert_eq!(card.action_label, "fix it");
    assert_eq!(card.kind.as_deref(), Some("leader_conflict"));
}

#[test]
fn card_ignore_fields_are_optional() {
    let json = r#"{"message": "m", "action_label": "a", "action_url": "/u"}"#;
    let suggestion: Suggestion = serde_json::from_str(json).unwrap();
    let Suggestion::Card(card) = suggestion else {
        panic!("expected a card");
    };
    assert!(card.ignore_label.is_none());
    assert!(card.kind.is_none());
}
