//! Community chat flows

mod common;

use common::test_state;
use readvault::error::AppError;

#[test]
fn feed_starts_with_seeded_entries() {
    let state = test_state();

    let history = state.chat_history();
    assert_eq!(history.len(), 4);
    assert!(history[0].is_system());
}

#[test]
fn post_without_session_fails_and_log_is_unchanged() {
    let mut state = test_state();
    let before = state.chat_history().len();

    let result = state.post_message("hi");
    assert!(matches!(result, Err(AppError::Unauthorized)));
    assert_eq!(state.chat_history().len(), before);
}

#[test]
fn signed_in_user_appends_to_the_log() {
    let mut state = test_state();
    state.login("reader@example.com", "x").unwrap();

    let message = state.post_message("Any sci-fi recommendations?").unwrap();

    let history = state.chat_history();
    assert_eq!(history.last().unwrap().id, message.id);
    assert_eq!(message.username, "reader");
    assert!(!message.is_system());
}

#[test]
fn blank_message_is_rejected() {
    let mut state = test_state();
    state.login("reader@example.com", "x").unwrap();
    let before = state.chat_history().len();

    assert!(state.post_message("   ").is_err());
    assert_eq!(state.chat_history().len(), before);
}

#[test]
fn messages_stay_in_chronological_order() {
    let mut state = test_state();
    state.login("reader@example.com", "x").unwrap();

    state.post_message("first").unwrap();
    state.post_message("second").unwrap();

    let bodies: Vec<&str> = state
        .chat_history()
        .iter()
        .skip(4) // seeded entries
        .map(|m| m.body.as_str())
        .collect();
    assert_eq!(bodies, vec!["first", "second"]);
}
