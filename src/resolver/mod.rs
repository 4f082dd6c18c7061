//! Cache-backed address resolution.
//!
//! Resolution runs a small state machine:
//!
//! ```text
//! Lookup --fresh hit--> Done(cached)
//!   |
//!   +--stale hit / miss--> Fetch --ok--> upsert --> Done(fetched)
//!                            |
//!                            +--error--> Done(error)   (cache untouched)
//! ```

use chrono::Utc;
use log::{debug, info, warn};

use crate::config::CACHE_TTL_SECS;
use crate::error_handling::LookupError;
use crate::geoip::{GeoIpClient, IpInfo};
use crate::storage::{AddressRecord, IpCache};

/// Where a resolved record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Cache,
    Remote,
}

/// A successfully resolved address.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub info: IpInfo,
    pub source: Source,
}

enum State {
    Lookup,
    Fetch,
    Done(Result<Resolution, LookupError>),
}

fn utc_now() -> i64 {
    Utc::now().timestamp()
}

/// Resolves routable addresses through the cache, falling back to the remote
/// service when the cached record is missing or stale.
pub struct Resolver<'a> {
    cache: &'a IpCache,
    remote: &'a GeoIpClient,
    ttl_secs: i64,
    clock: fn() -> i64,
}

impl<'a> Resolver<'a> {
    pub fn new(cache: &'a IpCache, remote: &'a GeoIpClient) -> Self {
        Self {
            cache,
            remote,
            ttl_secs: CACHE_TTL_SECS,
            clock: utc_now,
        }
    }

    /// Replaces the UTC seconds clock used for freshness checks and write stamps.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_ttl_secs(mut self, ttl_secs: i64) -> Self {
        self.ttl_secs = ttl_secs;
        self
    }

    /// Resolves `address`, which must already be classified as routable.
    ///
    /// # Errors
    ///
    /// - `LookupError::Storage` if the cache cannot be read (fatal)
    /// - `LookupError::Service` / `LookupError::Request` if the remote lookup fails;
    ///   the cache is left untouched in that case
    pub async fn resolve(&self, address: &str) -> Result<Resolution, LookupError> {
        let mut state = State::Lookup;
        loop {
            state = match state {
                State::Lookup => self.lookup(address).await,
                State::Fetch => self.fetch(address).await,
                State::Done(result) => return result,
            };
        }
    }

    async fn lookup(&self, address: &str) -> State {
        let record = match self.cache.get(address).await {
            Ok(record) => record,
            Err(e) => return State::Done(Err(e.into())),
        };

        match record {
            Some(record) => {
                let now = (self.clock)();
                if record.is_fresh(now, self.ttl_secs) {
                    debug!(
                        "Cache hit for {address} (age {}s)",
                        record.age_secs(now)
                    );
                    State::Done(Ok(Resolution {
                        info: record.into_info(),
                        source: Source::Cache,
                    }))
                } else {
                    info!(
                        "Cached record for {address} is stale (age {}s), refreshing",
                        record.age_secs(now)
                    );
                    State::Fetch
                }
            }
            None => State::Fetch,
        }
    }

    async fn fetch(&self, address: &str) -> State {
        let mut info = match self.remote.fetch(address).await {
            Ok(info) => info,
            Err(e) => {
                warn!("Lookup for {address} failed: {e}");
                return State::Done(Err(e));
            }
        };

        // Key by the text we were asked for, not the service's echo of it
        info.query = address.to_string();
        info.last_updated = (self.clock)();

        let record = AddressRecord::from_info(&info, info.last_updated);
        if let Err(e) = self.cache.upsert(&record).await {
            warn!("Failed to save {address} to cache: {e}");
        }

        State::Done(Ok(Resolution {
            info,
            source: Source::Remote,
        }))
    }
}
