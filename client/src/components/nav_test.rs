use super::*;
use portal_session::{SessionPhase, User};

fn member(busy: bool) -> SessionState {
    SessionState::fixture(SessionPhase::Authenticated(User::new("Ada", "ada@example.com")), busy, None)
}

#[test]
fn nav_menu_hidden_until_probe_settles() {
    let state = SessionState::fixture(SessionPhase::Initializing, true, None);
    assert_eq!(nav_menu(&state, Some(Route::Home)), NavMenu::Hidden);
    assert_eq!(nav_menu(&state, Some(Route::EditProfile)), NavMenu::Hidden);
}

#[test]
fn nav_menu_guest_links_for_anonymous() {
    let state = SessionState::fixture(SessionPhase::Anonymous, false, None);
    assert_eq!(nav_menu(&state, Some(Route::Login)), NavMenu::Guest);
    assert_eq!(nav_menu(&state, None), NavMenu::Guest);
}

#[test]
fn nav_menu_logout_only_on_edit_profile() {
    assert_eq!(nav_menu(&member(false), Some(Route::Home)), NavMenu::Hidden);
    assert_eq!(nav_menu(&member(false), Some(Route::EditProfile)), NavMenu::Logout { pending: false });
}

#[test]
fn nav_menu_logout_pending_while_busy() {
    assert_eq!(nav_menu(&member(true), Some(Route::EditProfile)), NavMenu::Logout { pending: true });
    assert_eq!(logout_label(true), "Logging out...");
    assert_eq!(logout_label(false), "Log out");
}
