use super::*;

#[test]
fn notice_state_default_is_empty() {
    assert!(NoticeState::default().message.is_none());
}

#[test]
fn show_replaces_and_clear_removes() {
    let mut state = NoticeState::default();
    state.show("first");
    state.show("second");
    assert_eq!(state.message.as_deref(), Some("second"));
    state.clear();
    assert!(state.message.is_none());
}
