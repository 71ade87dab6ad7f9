//! Network modules for the browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` is the only module that issues HTTP requests. Everything above it
//! talks to the backend through the session coordinator.

pub mod gateway;
