use super::*;
use portal_session::{SessionPhase, User};

fn member(busy: bool) -> SessionState {
    SessionState::fixture(SessionPhase::Authenticated(User::new("Alice", "alice@example.com")), busy, None)
}

fn anonymous() -> SessionState {
    SessionState::fixture(SessionPhase::Anonymous, false, None)
}

/// Redirect decisions for a sequence of committed states, as the effect sees them.
fn redirects(states: &[SessionState]) -> Vec<bool> {
    let mut seen_user = false;
    states
        .iter()
        .map(|state| {
            let redirect = should_redirect_unauth(seen_user, state);
            seen_user = track_seen_user(seen_user, state);
            redirect
        })
        .collect()
}

// =============================================================================
// should_redirect_unauth
// =============================================================================

#[test]
fn should_redirect_unauth_when_resolved_and_user_missing() {
    assert!(should_redirect_unauth(false, &anonymous()));
}

#[test]
fn should_not_redirect_while_initializing() {
    let state = SessionState::fixture(SessionPhase::Initializing, true, None);
    assert!(!should_redirect_unauth(false, &state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(false, &member(false)));
}

// =============================================================================
// state sequences
// =============================================================================

#[test]
fn probe_resolving_anonymous_redirects_once_settled() {
    let initializing = SessionState::fixture(SessionPhase::Initializing, true, None);
    assert_eq!(redirects(&[initializing, anonymous()]), vec![false, true]);
}

#[test]
fn mounting_after_probe_resolved_anonymous_redirects() {
    assert_eq!(redirects(&[anonymous()]), vec![true]);
}

#[test]
fn logout_from_signed_in_view_does_not_redirect() {
    assert_eq!(redirects(&[member(false), member(true), anonymous()]), vec![false, false, false]);
}

#[test]
fn failed_logout_settling_anonymous_does_not_redirect() {
    let failed = SessionState::fixture(SessionPhase::Anonymous, false, Some("Logout failed. Please try again."));
    assert_eq!(redirects(&[member(true), failed, anonymous()]), vec![false, false, false]);
}
