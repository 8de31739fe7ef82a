use super::*;

#[test]
fn kind_parse_defaults_to_info() {
    assert_eq!(NotificationKind::parse("success"), NotificationKind::Success);
    assert_eq!(NotificationKind::parse(" ERROR "), NotificationKind::Error);
    assert_eq!(NotificationKind::parse("warning"), NotificationKind::Warning);
    assert_eq!(NotificationKind::parse("bogus"), NotificationKind::Info);
    assert_eq!(NotificationKind::default(), NotificationKind::Info);
}

#[test]
fn every_kind_has_an_icon() {
    for kind in [NotificationKind::Success, NotificationKind::Error, NotificationKind::Info, NotificationKind::Warning] {
        assert!(!kind.icon().is_empty());
    }
}

#[test]
fn removal_never_exceeds_five_seconds() {
    assert!(LEAVE_AFTER_MS < REMOVE_AFTER_MS);
    assert!(REMOVE_AFTER_MS <= 5_000);
}

#[test]
fn push_appends_newest_last() {
    let mut state = NotificationsState::default();
    state.push("one", NotificationKind::Info);
    state.push("two", NotificationKind::Success);
    let messages: Vec<_> = state.items.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, ["one", "two"]);
}

#[test]
fn fifth_push_evicts_oldest() {
    let mut state = NotificationsState::default();
    for i in 0..5 {
        state.push(format!("n{i}"), NotificationKind::Info);
    }
    assert_eq!(state.items.len(), MAX_VISIBLE);
    assert_eq!(state.items[0].message, "n1");
    assert_eq!(state.items[3].message, "n4");
}

#[test]
fn duplicate_is_coalesced_and_moved_to_newest() {
    let mut state = NotificationsState::default();
    let first = state.push("Processing thermal image...", NotificationKind::Info);
    state.push("other", NotificationKind::Info);
    let again = state.push("Processing thermal image...", NotificationKind::Info);
    assert_eq!(state.items.len(), 2);
    assert_eq!(again.id, first.id);
    assert_eq!(again.generation, first.generation + 1);
    assert_eq!(state.items[1].id, first.id);
}

#[test]
fn same_message_different_kind_is_not_coalesced() {
    let mut state = NotificationsState::default();
    state.push("hello", NotificationKind::Info);
    state.push("hello", NotificationKind::Error);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn stale_ticket_does_nothing_after_coalesce() {
    let mut state = NotificationsState::default();
    let old = state.push("x", NotificationKind::Info);
    let new = state.push("x", NotificationKind::Info);
    assert!(!state.begin_leave(old));
    assert!(!state.expire(old));
    assert_eq!(state.items.len(), 1);
    assert!(state.begin_leave(new));
    assert!(state.items[0].leaving);
    assert!(state.expire(new));
    assert!(state.items.is_empty());
}

#[test]
fn coalesce_revives_leaving_entry() {
    let mut state = NotificationsState::default();
    let t = state.push("x", NotificationKind::Warning);
    state.begin_leave(t);
    state.push("x", NotificationKind::Warning);
    assert!(!state.items[0].leaving);
}

#[test]
fn dismiss_removes_immediately() {
    let mut state = NotificationsState::default();
    let t = state.push("bye", NotificationKind::Success);
    assert!(state.dismiss(t.id));
    assert!(state.items.is_empty());
    assert!(!state.dismiss(t.id));
    assert!(!state.expire(t));
}

#[test]
fn class_name_reflects_kind_and_leaving() {
    let mut state = NotificationsState::default();
    let t = state.push("m", NotificationKind::Error);
    assert_eq!(state.items[0].class_name(), "notification notification-error");
    state.begin_leave(t);
    assert_eq!(state.items[0].class_name(), "notification notification-error notification--leaving");
}
