//! Error handling.
//!
//! Error types are split into:
//! - **Initialization errors**: logger and HTTP client setup
//! - **Database errors**: cache file creation and SQL failures
//! - **Lookup errors**: everything that can end a single resolution, each
//!   classified by an [`ErrorKind`]

mod types;

// Re-export public API
pub use types::{
    ConfigValidationError, DatabaseError, ErrorKind, InitializationError, LookupError,
};
