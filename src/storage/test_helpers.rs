//! Shared test helpers for storage module tests.

#[cfg(test)]
use sqlx::sqlite::SqlitePoolOptions;

#[cfg(test)]
use crate::storage::{AddressRecord, IpCache};

/// Creates a cache over a single-connection in-memory database.
#[cfg(test)]
pub async fn create_test_cache() -> IpCache {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    IpCache::from_pool(pool)
        .await
        .expect("Failed to create ip_cache table")
}

/// Creates a record for `address` with fixed Google DNS metadata.
#[cfg(test)]
pub fn sample_record(address: &str, last_updated: i64) -> AddressRecord {
    AddressRecord {
        address: address.to_string(),
        country: "United States".into(),
        region: "Virginia".into(),
        city: "Ashburn".into(),
        isp: "Google LLC".into(),
        org: "Google Public DNS".into(),
        as_number: "AS15169 Google LLC".into(),
        timezone: "America/New_York".into(),
        latitude: 39.03,
        longitude: -77.5,
        last_updated,
    }
}
