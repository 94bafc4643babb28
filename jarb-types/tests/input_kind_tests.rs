use jarb_types::InputKind;
use proptest::prelude::*;
use std::str::FromStr;

// ── Specificity resolution ───────────────────────────────────────

#[test]
fn email_beats_text() {
    assert_eq!(InputKind::most_specific(&["email", "text"]), InputKind::Email);
}

#[test]
fn priority_wins_over_input_order() {
    assert_eq!(InputKind::most_specific(&["text", "email"]), InputKind::Email);
    assert_eq!(InputKind::most_specific(&["number", "date"]), InputKind::Date);
}

#[test]
fn empty_resolves_to_text() {
    let kinds: [&str; 0] = [];
    assert_eq!(InputKind::most_specific(&kinds), InputKind::Text);
}

#[test]
fn unknown_only_resolves_to_text() {
    assert_eq!(InputKind::most_specific(&["checkbox", "range"]), InputKind::Text);
}

#[test]
fn unknown_entries_are_skipped() {
    let kinds = vec!["checkbox".to_string(), "number".to_string()];
    assert_eq!(InputKind::most_specific(&kinds), InputKind::Number);
}

#[test]
fn datetime_local_beats_datetime() {
    assert_eq!(
        InputKind::most_specific(&["datetime", "datetime-local"]),
        InputKind::DatetimeLocal
    );
}

// ── Names ────────────────────────────────────────────────────────

#[test]
fn names_roundtrip_through_from_str() {
    for kind in InputKind::PRIORITY {
        assert_eq!(InputKind::from_str(kind.as_str()).unwrap(), kind);
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn from_str_rejects_unknown() {
    assert!(InputKind::from_str("checkbox").is_err());
}

#[test]
fn serde_uses_html_names() {
    let json = serde_json::to_string(&InputKind::DatetimeLocal).unwrap();
    assert_eq!(json, "\"datetime-local\"");
    let kind: InputKind = serde_json::from_str("\"tel\"").unwrap();
    assert_eq!(kind, InputKind::Tel);
}

// ── Properties ───────────────────────────────────────────────────

fn kind_strategy() -> impl Strategy<Value = InputKind> {
    prop::sample::select(InputKind::PRIORITY.to_vec())
}

fn rank(kind: InputKind) -> usize {
    InputKind::PRIORITY.iter().position(|k| *k == kind).unwrap()
}

proptest! {
    /// The resolved kind is the highest-priority kind present, whatever the order.
    #[test]
    fn resolves_to_highest_priority_member(kinds in prop::collection::vec(kind_strategy(), 1..8)) {
        let names: Vec<&str> = kinds.iter().map(InputKind::as_str).collect();
        let expected = *kinds.iter().min_by_key(|k| rank(**k)).unwrap();
        prop_assert_eq!(InputKind::most_specific(&names), expected);
    }

    /// Reordering the input never changes the result.
    #[test]
    fn order_independent(kinds in prop::collection::vec(kind_strategy(), 0..8)) {
        let names: Vec<&str> = kinds.iter().map(InputKind::as_str).collect();
        let mut reversed = names.clone();
        reversed.reverse();
        prop_assert_eq!(InputKind::most_specific(&names), InputKind::most_specific(&reversed));
    }
}
