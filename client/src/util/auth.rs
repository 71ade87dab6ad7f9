//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components that require a session apply identical unauthenticated
//! redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use portal_session::{Redirect, Route, SessionState};

/// True once the session has resolved with no user, unless this view has
/// already seen a signed-in user. A logout from the view follows its own
/// redirect instead.
pub fn should_redirect_unauth(seen_user: bool, state: &SessionState) -> bool {
    !seen_user && state.is_resolved() && !state.is_authenticated()
}

/// Fold `state` into the view's "has seen a signed-in user" flag.
pub fn track_seen_user(seen_user: bool, state: &SessionState) -> bool {
    seen_user || state.is_authenticated()
}

/// Redirect to `/login` when the startup probe resolves with no user, or when
/// the view mounts after it already did.
pub fn install_unauth_redirect<F>(session: ReadSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move |seen_user: Option<bool>| {
        let seen_user = seen_user.unwrap_or(false);
        let (redirect, seen_user) =
            session.with(|s| (should_redirect_unauth(seen_user, s), track_seen_user(seen_user, s)));
        if redirect {
            navigate(Route::Login.path(), NavigateOptions::default());
        }
        seen_user
    });
}

/// Follow a one-shot redirect returned by a session action.
pub fn follow_redirect<F>(redirect: Redirect, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    navigate(&redirect.into_href(), NavigateOptions::default());
}
