//! The single session record and its explicit phase machine.
//!
//! DESIGN
//! ======
//! Who is logged in is a tagged [`SessionPhase`]; whether an action is in
//! flight is an orthogonal `busy` flag. Identity lives inside
//! `Authenticated`, so an anonymous state with a leftover name cannot be
//! represented. Fields are private and every transition is crate-private:
//! only the coordinator produces new states, everyone else reads.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::types::User;

/// Logical authentication phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// The startup probe has not resolved. Views must render this as
    /// "unknown", never as either of the other phases.
    #[default]
    Initializing,
    Anonymous,
    Authenticated(User),
}

/// Snapshot of the client-side session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    phase: SessionPhase,
    busy: bool,
    last_error: Option<String>,
}

impl SessionState {
    #[must_use]
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Current identity, if authenticated.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match &self.phase {
            SessionPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Display name; empty unless authenticated.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user().map_or("", |u| u.name.as_str())
    }

    /// Email; empty unless authenticated.
    #[must_use]
    pub fn email(&self) -> &str {
        self.user().map_or("", |u| u.email.as_str())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    /// True once the startup probe has settled, whatever its outcome.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !matches!(self.phase, SessionPhase::Initializing)
    }

    /// True while the startup probe or any session action is in flight.
    /// Submit controls should be disabled while this holds.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.busy || !self.is_resolved()
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.busy
    }

    /// Message of the most recent failed action.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Mark an action as started: busy, previous error cleared, phase kept.
    pub(crate) fn begin(&self) -> Self {
        Self { phase: self.phase.clone(), busy: true, last_error: None }
    }

    /// Settle into `phase` with no action in flight.
    pub(crate) fn settled(phase: SessionPhase, last_error: Option<String>) -> Self {
        Self { phase, busy: false, last_error }
    }

    /// Same phase, not busy, carrying `message` as the latest error.
    pub(crate) fn failed(&self, message: impl Into<String>) -> Self {
        Self::settled(self.phase.clone(), Some(message.into()))
    }

    /// Build an arbitrary state for view tests.
    #[cfg(feature = "fixtures")]
    #[must_use]
    pub fn fixture(phase: SessionPhase, busy: bool, last_error: Option<&str>) -> Self {
        Self { phase, busy, last_error: last_error.map(str::to_owned) }
    }

    /// Replace the identity while staying authenticated.
    pub(crate) fn with_user(user: User) -> Self {
        Self::settled(SessionPhase::Authenticated(user), None)
    }
}
