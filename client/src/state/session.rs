//! Signal-backed session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The coordinator writes through [`SignalStore`]; views subscribe to the
//! read half returned by [`SignalStore::reader`] and never see the writer.
//!
//! DESIGN
//! ======
//! A commit that lands after the owning reactive scope was torn down (the app
//! unmounted while a request was in flight) is dropped with a debug log
//! instead of writing into a disposed signal.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use portal_session::{SessionCoordinator, SessionState, SessionStore};

use crate::net::gateway::HttpSessionGateway;

/// Coordinator type shared through context.
pub type AppCoordinator = SessionCoordinator<HttpSessionGateway, SignalStore>;

/// Message of a failed startup probe. Provided by `App` so the home page can
/// show it without picking up errors from other views.
#[derive(Clone, Copy, Debug)]
pub struct StartupError(pub ReadSignal<Option<String>>);

/// [`SessionStore`] over a Leptos `RwSignal`.
#[derive(Clone, Copy, Debug)]
pub struct SignalStore {
    state: RwSignal<SessionState>,
}

impl SignalStore {
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    /// Read-only handle for views.
    pub fn reader(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }
}

impl Default for SignalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for SignalStore {
    fn snapshot(&self) -> SessionState {
        self.state.try_get_untracked().unwrap_or_default()
    }

    fn commit(&self, next: SessionState) {
        if self.state.try_set(next).is_some() {
            log::debug!("session: commit after unmount ignored");
        }
    }
}
