//! check_ip library: geolocation lookup for a single IP address
//!
//! Addresses inside reserved/non-routable blocks are rejected up front. Routable
//! addresses are served from a local SQLite cache while the cached record is
//! less than 24 hours old, and fetched from a remote JSON service otherwise.
//!
//! # Example
//!
//! ```no_run
//! use check_ip::{run_check, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     address: Some("8.8.8.8".to_string()),
//!     ..Default::default()
//! };
//!
//! let report = run_check(config).await?;
//! println!("{}", report.output);
//! # Ok(())
//! # }
//! ```

mod app;
pub mod classifier;
pub mod config;
mod error_handling;
pub mod geoip;
pub mod initialization;
pub mod resolver;
pub mod storage;

// Re-export public API
pub use classifier::{is_non_routable, ReservedBlocks};
pub use config::{Config, ExitPolicy, LogFormat, LogLevel, Opt};
pub use error_handling::{
    ConfigValidationError, DatabaseError, ErrorKind, InitializationError, LookupError,
};
pub use run::{run_check, run_check_with_blocks, CheckReport};

// Internal run module (contains the top-level control flow)
mod run {
    use anyhow::{Context, Result};
    use log::{debug, info};

    use crate::app::{exit_code, render_error, render_success};
    use crate::classifier::{is_non_routable, ReservedBlocks};
    use crate::config::Config;
    use crate::error_handling::{ErrorKind, LookupError};
    use crate::geoip::GeoIpClient;
    use crate::initialization::init_client;
    use crate::resolver::Resolver;
    use crate::storage::IpCache;

    /// Result of one invocation: what to print and how to exit.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CheckReport {
        /// Text for stdout (pretty JSON record or compact `{"error":...}`)
        pub output: String,
        /// Process exit code under the configured `ExitPolicy`
        pub exit_code: i32,
        /// Classification of the failure, `None` on success
        pub failure: Option<ErrorKind>,
    }

    impl CheckReport {
        fn failed(config: &Config, err: &LookupError) -> Self {
            let kind = err.kind();
            debug!("{kind}: {err}");
            Self {
                output: render_error(&err.to_string()),
                exit_code: exit_code(config.exit_policy, Some(kind)),
                failure: Some(kind),
            }
        }
    }

    /// Resolves `config.address` using the built-in reserved block list.
    ///
    /// See [`run_check_with_blocks`].
    pub async fn run_check(config: Config) -> Result<CheckReport> {
        run_check_with_blocks(config, ReservedBlocks::standard()).await
    }

    /// Resolves `config.address`, rejecting anything inside `blocks`.
    ///
    /// Usage errors, non-routable addresses and remote lookup failures are
    /// reported inside the returned `CheckReport`.
    ///
    /// # Errors
    ///
    /// Returns an error (the caller should terminate) if:
    /// - The configuration is invalid
    /// - The cache database cannot be opened, created or read
    /// - The HTTP client cannot be built
    pub async fn run_check_with_blocks(
        config: Config,
        blocks: &ReservedBlocks,
    ) -> Result<CheckReport> {
        let Some(address) = config.address.clone() else {
            return Ok(CheckReport::failed(&config, &LookupError::Usage));
        };

        config.validate().context("Invalid configuration")?;

        if is_non_routable(&address, blocks) {
            info!("Refusing to look up {address}: non-routable or reserved");
            return Ok(CheckReport::failed(
                &config,
                &LookupError::NonRoutable(address),
            ));
        }

        let cache = IpCache::open(&config.db_path).await.with_context(|| {
            format!(
                "Failed to open cache database {}",
                config.db_path.display()
            )
        })?;
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let remote = GeoIpClient::new(client, config.endpoint.clone());

        let result = Resolver::new(&cache, &remote).resolve(&address).await;
        cache.close().await;

        match result {
            Ok(resolution) => {
                debug!("Resolved {address} from {:?}", resolution.source);
                let output = render_success(&resolution.info)
                    .context("Failed to serialize lookup result")?;
                Ok(CheckReport {
                    output,
                    exit_code: exit_code(config.exit_policy, None),
                    failure: None,
                })
            }
            Err(e) if e.kind().is_fatal() => {
                Err(anyhow::Error::new(e).context("Failed to read cache database"))
            }
            Err(e) => Ok(CheckReport::failed(&config, &e)),
        }
    }
}
