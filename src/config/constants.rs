//! Configuration constants.
//!
//! Defaults and fixed values used throughout the application: cache freshness,
//! the remote endpoint, the database location and user-facing messages.

/// Freshness window for cached records, in seconds (24 hours).
///
/// A record is fresh while `now - last_updated` is strictly below this value.
pub const CACHE_TTL_SECS: i64 = 24 * 60 * 60;

/// Default SQLite cache file, relative to the working directory.
pub const DB_PATH: &str = "./ip_cache.db";

/// Placeholder substituted with the queried address in the endpoint template.
pub const ENDPOINT_PLACEHOLDER: &str = "{ip}";

/// Default remote lookup endpoint (ip-api.com JSON API).
pub const DEFAULT_ENDPOINT: &str = "http://ip-api.com/json/{ip}";

/// Literal `status` value the remote service uses to mark success.
pub const STATUS_SUCCESS: &str = "success";

/// Usage line printed when no address is given.
pub const USAGE_MESSAGE: &str = "Usage: ./CheckIP <ip-address>";

/// User-Agent sent with remote lookups.
pub const DEFAULT_USER_AGENT: &str = concat!("check_ip/", env!("CARGO_PKG_VERSION"));

/// Exit code for a missing argument when strict exit codes are enabled.
pub const EXIT_USAGE: i32 = 2;

/// Exit code for any other soft failure when strict exit codes are enabled.
pub const EXIT_FAILURE: i32 = 1;
