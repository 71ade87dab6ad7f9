//! Client-side session model shared by the browser client and the CLI.
//!
//! This crate owns the single in-memory answer to "who is logged in": the
//! [`SessionState`] record, the [`SessionCoordinator`] that is its only writer,
//! and the [`SessionGateway`] seam through which the coordinator reaches the
//! backend. It has no browser or HTTP-library dependency; each front end
//! supplies its own gateway and store.

pub mod coordinator;
pub mod gateway;
pub mod redirect;
pub mod state;
pub mod store;
pub mod types;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use coordinator::{SessionAction, SessionCoordinator, SessionError};
pub use gateway::{GatewayError, SessionGateway};
pub use redirect::{Redirect, Route};
pub use state::{SessionPhase, SessionState};
pub use store::{MemoryStore, SessionStore};
pub use types::{ProfileUpdate, User};
