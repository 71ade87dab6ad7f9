//! Shared reactive state for the browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session record is the only shared state. It is provided once by `App`
//! and read by every page and component through context.

pub mod session;
