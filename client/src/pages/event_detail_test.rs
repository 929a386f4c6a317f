use super::*;

#[test]
fn parse_event_id_accepts_numeric_segments() {
    assert_eq!(parse_event_id("3"), Some(3));
    assert_eq!(parse_event_id(" 12 "), Some(12));
}

#[test]
fn parse_event_id_rejects_garbage() {
    assert_eq!(parse_event_id(""), None);
    assert_eq!(parse_event_id("abc"), None);
    assert_eq!(parse_event_id("-1"), None);
    assert_eq!(parse_event_id("1.5"), None);
}

#[test]
fn known_ids_resolve_and_unknown_ids_do_not() {
    let dataset = campus();
    let first = dataset.events[0].id;
    assert!(parse_event_id(&first.to_string()).and_then(|id| dataset.event(id)).is_some());
    assert!(parse_event_id("999999").and_then(|id| dataset.event(id)).is_none());
}
