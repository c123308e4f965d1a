//! Aura daemon library.
//!
//! The binary in main.rs wires these modules together; they are exposed as
//! a library so integration tests can drive the answer pipeline directly.

pub mod answer_router;
pub mod auth;
pub mod routes;
pub mod server;
pub mod sessions;
pub mod store;
pub mod weather;
