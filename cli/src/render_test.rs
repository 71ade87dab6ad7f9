use super::*;
use portal_session::User;

#[test]
fn render_state_per_phase() {
    assert_eq!(render_state(&SessionState::default()), "Session unknown.");
    assert_eq!(render_state(&SessionState::fixture(SessionPhase::Anonymous, false, None)), "Not signed in.");

    let user = User::new("Ada", "ada@example.com");
    let state = SessionState::fixture(SessionPhase::Authenticated(user), false, None);
    assert_eq!(render_state(&state), "Signed in as Ada <ada@example.com>");
}

#[test]
fn render_state_appends_error() {
    let state = SessionState::fixture(SessionPhase::Anonymous, false, Some("Login failed"));
    assert_eq!(render_state(&state), "Not signed in.\nError: Login failed");
}

#[test]
fn export_line_names_token_env() {
    assert_eq!(export_line("abc"), "export PORTAL_SESSION_TOKEN=abc");
}
