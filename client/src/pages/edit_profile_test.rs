use super::*;
use portal_session::{SessionPhase, User};

#[test]
fn seed_fields_from_identity() {
    let user = User::new("Ada", "ada@example.com");
    let state = SessionState::fixture(SessionPhase::Authenticated(user), false, None);
    assert_eq!(seed_fields(&state), Some(("Ada".to_owned(), "ada@example.com".to_owned())));
}

#[test]
fn seed_fields_absent_without_identity() {
    assert_eq!(seed_fields(&SessionState::default()), None);
    assert_eq!(seed_fields(&SessionState::fixture(SessionPhase::Anonymous, false, None)), None);
}

#[test]
fn submit_label_reflects_loading() {
    assert_eq!(submit_label(true), "Saving...");
    assert_eq!(submit_label(false), "Save Changes");
}
