//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form inputs and route-scoped orchestration. Session
//! changes go through the coordinator from context; pages only read the
//! session signal.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use portal_session::SessionState;

pub mod edit_profile;
pub mod home;
pub mod login;
pub mod register;

/// Error to show on a form page. Only errors produced by this page's own
/// submissions are shown, so a failure from another view does not leak in.
pub(crate) fn form_error(state: &SessionState, submitted: bool) -> Option<String> {
    if submitted && !state.is_loading() {
        state.last_error().map(str::to_owned)
    } else {
        None
    }
}
