//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind as ClapErrorKind;
use clap::{Parser, ValueEnum};

use crate::config::constants::{DB_PATH, DEFAULT_ENDPOINT, ENDPOINT_PLACEHOLDER};
use crate::error_handling::ConfigValidationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How soft failures (usage, non-routable address, lookup errors) map to the
/// process exit code.
///
/// The error JSON printed to stdout is identical under both policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitPolicy {
    /// Always exit 0; errors are only visible in the output.
    Compatible,
    /// Exit non-zero on any soft failure.
    Strict,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use check_ip::Config;
///
/// let config = Config {
///     address: Some("8.8.8.8".to_string()),
///     timeout_seconds: Some(5),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to resolve (`None` when the argument was omitted)
    pub address: Option<String>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Database path (SQLite file)
    pub db_path: PathBuf,

    /// Remote lookup URL template; `{ip}` is replaced with the address
    pub endpoint: String,

    /// Remote call timeout in seconds (`None` waits indefinitely)
    pub timeout_seconds: Option<u64>,

    /// Exit code policy for soft failures
    pub exit_policy: ExitPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: None,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            db_path: PathBuf::from(DB_PATH),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: None,
            exit_policy: ExitPolicy::Compatible,
        }
    }
}

impl Config {
    /// Checks option values that clap cannot validate on its own.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigValidationError` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                "must be greater than 0 (omit the flag to wait indefinitely)",
            ));
        }

        if !self.endpoint.contains(ENDPOINT_PLACEHOLDER) {
            return Err(ConfigValidationError::new(
                "endpoint",
                format!("must contain the {ENDPOINT_PLACEHOLDER} placeholder"),
            ));
        }

        let sample = self.endpoint.replace(ENDPOINT_PLACEHOLDER, "192.0.2.1");
        match url::Url::parse(&sample) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
            Ok(parsed) => Err(ConfigValidationError::new(
                "endpoint",
                format!("scheme must be http or https, got {}", parsed.scheme()),
            )),
            Err(e) => Err(ConfigValidationError::new(
                "endpoint",
                format!("is not a valid URL: {e}"),
            )),
        }
    }
}

/// Command-line options.
///
/// ```bash
/// # Resolve one address
/// CheckIP 8.8.8.8
///
/// # Fail with a non-zero exit code on errors, bounded network wait
/// CheckIP 8.8.8.8 --strict-exit --timeout-seconds 5
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "CheckIP",
    about = "Resolves geolocation and ISP metadata for an IP address, caching results locally."
)]
pub struct Opt {
    /// IP address to resolve
    pub address: Option<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Database path (SQLite file)
    #[arg(long, value_parser, default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// Lookup URL template, `{ip}` is replaced with the address
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Timeout for the remote lookup in seconds (default: no timeout)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Exit non-zero on errors instead of always exiting 0
    #[arg(long)]
    pub strict_exit: bool,
}

impl Opt {
    /// Parses `args`, falling back to the first argument as the address when
    /// the command line is not understood (unknown flag, extra positional,
    /// value starting with `-`).
    ///
    /// The fallback keeps every option at its default. The clap error is
    /// returned alongside so the caller can log it. Help and version requests
    /// still print and exit.
    pub fn parse_lenient<I, T>(args: I) -> (Self, Option<clap::Error>)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match Self::try_parse_from(args.iter().cloned()) {
            Ok(opt) => (opt, None),
            Err(e)
                if matches!(
                    e.kind(),
                    ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
                ) =>
            {
                e.exit()
            }
            Err(e) => {
                let address = args.get(1).map(|a| a.to_string_lossy().into_owned());
                (Self::with_defaults(address), Some(e))
            }
        }
    }

    fn with_defaults(address: Option<String>) -> Self {
        Self {
            address,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            db_path: PathBuf::from(DB_PATH),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: None,
            strict_exit: false,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            address: opt.address,
            log_level: opt.log_level,
            log_format: opt.log_format,
            db_path: opt.db_path,
            endpoint: opt.endpoint,
            timeout_seconds: opt.timeout_seconds,
            exit_policy: if opt.strict_exit {
                ExitPolicy::Strict
            } else {
                ExitPolicy::Compatible
            },
        }
    }
}
