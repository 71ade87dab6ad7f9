use super::*;
use portal_session::SessionPhase;

#[test]
fn form_error_hidden_before_submit() {
    let state = SessionState::fixture(SessionPhase::Anonymous, false, Some("Login failed"));
    assert_eq!(form_error(&state, false), None);
}

#[test]
fn form_error_shown_after_submit_settles() {
    let state = SessionState::fixture(SessionPhase::Anonymous, false, Some("Login failed"));
    assert_eq!(form_error(&state, true).as_deref(), Some("Login failed"));
}

#[test]
fn form_error_hidden_while_request_in_flight() {
    let state = SessionState::fixture(SessionPhase::Anonymous, true, None);
    assert_eq!(form_error(&state, true), None);
}
