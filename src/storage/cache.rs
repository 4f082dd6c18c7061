// storage/cache.rs
// Key-value access to the ip_cache table

use std::path::Path;

use log::debug;
use sqlx::{Row, SqlitePool};

use super::migrations::run_migrations;
use super::models::AddressRecord;
use super::pool::init_db_pool_with_path;
use crate::error_handling::DatabaseError;

/// Persistent address cache keyed by the queried address text.
///
/// Writes replace the whole row; there is no partial update and no delete.
#[derive(Debug, Clone)]
pub struct IpCache {
    pool: SqlitePool,
}

impl IpCache {
    /// Opens (creating if needed) the cache file and ensures the schema exists.
    pub async fn open(db_path: &Path) -> Result<Self, DatabaseError> {
        let pool = init_db_pool_with_path(db_path).await?;
        Self::from_pool(pool).await
    }

    /// Wraps an existing pool, ensuring the schema exists.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, DatabaseError> {
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the row for `address`, fresh or not.
    pub async fn get(&self, address: &str) -> Result<Option<AddressRecord>, DatabaseError> {
        let row = sqlx::query(
            "SELECT ip, country, region, city, isp, org, asn, timezone, lat, lon, last_updated
             FROM ip_cache WHERE ip = ?",
        )
        .bind(address)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            debug!("Cache miss for {address}");
            return Ok(None);
        };

        let text = |column: &str| -> Result<String, sqlx::Error> {
            Ok(row.try_get::<Option<String>, _>(column)?.unwrap_or_default())
        };

        Ok(Some(AddressRecord {
            address: row.try_get("ip")?,
            country: text("country")?,
            region: text("region")?,
            city: text("city")?,
            isp: text("isp")?,
            org: text("org")?,
            as_number: text("asn")?,
            timezone: text("timezone")?,
            latitude: row.try_get::<Option<f64>, _>("lat")?.unwrap_or_default(),
            longitude: row.try_get::<Option<f64>, _>("lon")?.unwrap_or_default(),
            last_updated: row
                .try_get::<Option<i64>, _>("last_updated")?
                .unwrap_or_default(),
        }))
    }

    /// Inserts `record`, replacing any existing row with the same address.
    pub async fn upsert(&self, record: &AddressRecord) -> Result<(), DatabaseError> {
        sqlx::query(
            "INSERT OR REPLACE INTO ip_cache
             (ip, country, region, city, isp, org, asn, timezone, lat, lon, last_updated)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.address)
        .bind(&record.country)
        .bind(&record.region)
        .bind(&record.city)
        .bind(&record.isp)
        .bind(&record.org)
        .bind(&record.as_number)
        .bind(&record.timezone)
        .bind(record.latitude)
        .bind(record.longitude)
        .bind(record.last_updated)
        .execute(&self.pool)
        .await?;

        debug!(
            "Cached {} (last_updated={})",
            record.address, record.last_updated
        );
        Ok(())
    }

    /// Number of cached rows.
    pub async fn len(&self) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ip_cache")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}
