use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_initializing_and_loading() {
    let state = SessionState::default();
    assert_eq!(state.phase(), &SessionPhase::Initializing);
    assert!(state.is_loading());
    assert!(!state.is_resolved());
    assert!(!state.is_authenticated());
    assert_eq!(state.last_error(), None);
}

#[test]
fn default_state_has_empty_identity() {
    let state = SessionState::default();
    assert_eq!(state.display_name(), "");
    assert_eq!(state.email(), "");
}

// =============================================================
// Accessors
// =============================================================

#[test]
fn authenticated_state_exposes_identity() {
    let state = SessionState::with_user(User::new("Ada", "ada@example.com"));
    assert!(state.is_authenticated());
    assert!(!state.is_loading());
    assert_eq!(state.display_name(), "Ada");
    assert_eq!(state.email(), "ada@example.com");
}

#[test]
fn anonymous_state_is_resolved_and_idle() {
    let state = SessionState::settled(SessionPhase::Anonymous, None);
    assert!(state.is_resolved());
    assert!(!state.is_loading());
    assert_eq!(state.user(), None);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn begin_clears_error_and_keeps_phase() {
    let state = SessionState::settled(SessionPhase::Anonymous, Some("boom".into()));
    let next = state.begin();
    assert!(next.is_loading());
    assert_eq!(next.last_error(), None);
    assert_eq!(next.phase(), &SessionPhase::Anonymous);
}

#[test]
fn failed_keeps_phase_and_settles() {
    let state = SessionState::with_user(User::new("Ada", "ada@example.com")).begin();
    let next = state.failed("Invalid input");
    assert!(!next.is_loading());
    assert!(next.is_authenticated());
    assert_eq!(next.last_error(), Some("Invalid input"));
}
