//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome from the session context and dispatch
//! session actions through the coordinator.

pub mod nav;
