//! Application-level helpers: result rendering and exit codes.

mod output;

pub use output::{exit_code, render_error, render_success};
