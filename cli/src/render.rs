//! Plain-text rendering of session snapshots.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use portal_session::{Redirect, SessionPhase, SessionState};

/// One line describing who is signed in, plus the latest error if any.
pub fn render_state(state: &SessionState) -> String {
    let mut out = match state.phase() {
        SessionPhase::Initializing => "Session unknown.".to_owned(),
        SessionPhase::Anonymous => "Not signed in.".to_owned(),
        SessionPhase::Authenticated(user) => format!("Signed in as {} <{}>", user.name, user.email),
    };
    if let Some(error) = state.last_error() {
        out.push_str("\nError: ");
        out.push_str(error);
    }
    out
}

/// Where the action would send a browser, and its flash message.
pub fn render_redirect(redirect: Redirect) -> String {
    match redirect.flash().map(str::to_owned) {
        Some(flash) => format!("{flash}\n-> {}", redirect.into_href()),
        None => format!("-> {}", redirect.into_href()),
    }
}

/// Shell line that resumes the session in a later invocation.
pub fn export_line(token: &str) -> String {
    format!("export PORTAL_SESSION_TOKEN={token}")
}
