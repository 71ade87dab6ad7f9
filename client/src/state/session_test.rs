use super::*;
use portal_session::{SessionPhase, User};

fn signed_in() -> SessionState {
    SessionState::fixture(SessionPhase::Authenticated(User::new("Ada", "ada@example.com")), false, None)
}

#[test]
fn new_store_starts_initializing() {
    let owner = Owner::new();
    owner.with(|| {
        let store = SignalStore::new();
        assert_eq!(store.snapshot(), SessionState::default());
        assert!(store.reader().get_untracked().is_loading());
    });
}

#[test]
fn commit_is_visible_through_reader() {
    let owner = Owner::new();
    owner.with(|| {
        let store = SignalStore::new();
        let reader = store.reader();
        store.commit(signed_in());
        assert_eq!(reader.get_untracked().display_name(), "Ada");
        assert_eq!(store.snapshot(), signed_in());
    });
}

#[test]
fn commit_after_dispose_is_dropped() {
    let owner = Owner::new();
    owner.with(|| {
        let store = SignalStore::new();
        store.state.dispose();
        store.commit(signed_in());
        assert_eq!(store.snapshot(), SessionState::default());
    });
}
