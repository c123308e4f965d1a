//! Shared types and logic for Aura components.
//!
//! Holds the expression normalizer/evaluator, the canned-response tables,
//! the wire types spoken between aurad and auractl, and configuration.

pub mod canned;
pub mod config;
pub mod error;
pub mod eval;
pub mod rpc;

pub use config::AuraConfig;
pub use error::{AuraError, EvalError};

/// Crate version, single source of truth for daemon and CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default address the daemon binds and the CLI connects to.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:7870";
