//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (cache TTL, endpoint, database path)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ExitPolicy, LogFormat, LogLevel, Opt};
