//! Storage seam for the session record.

use std::cell::RefCell;

use crate::state::SessionState;

/// Holder of the one live [`SessionState`].
///
/// The coordinator is the only caller of [`SessionStore::commit`]. Views get
/// read access through whatever projection the front end builds on top
/// (a Leptos `ReadSignal` in the browser, a snapshot in the CLI).
pub trait SessionStore {
    /// Clone of the current state.
    fn snapshot(&self) -> SessionState;

    /// Replace the current state. Stores whose readers have been torn down
    /// drop the write.
    fn commit(&self, next: SessionState);
}

/// Single-threaded in-memory store for native front ends.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RefCell<SessionState>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    fn commit(&self, next: SessionState) {
        *self.state.borrow_mut() = next;
    }
}
