// storage/migrations.rs
// Cache schema setup

use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

const CREATE_IP_CACHE: &str = "CREATE TABLE IF NOT EXISTS ip_cache (
    ip TEXT PRIMARY KEY,
    country TEXT,
    region TEXT,
    city TEXT,
    isp TEXT,
    org TEXT,
    asn TEXT,
    timezone TEXT,
    lat REAL,
    lon REAL,
    last_updated INTEGER
)";

/// Creates the `ip_cache` table if it is missing. Safe to run on every start.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::query(CREATE_IP_CACHE).execute(pool).await?;
    Ok(())
}
