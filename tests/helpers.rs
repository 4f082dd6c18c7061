// Shared test helpers for cache setup and the mocked lookup service.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use serde_json::{json, Value};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use check_ip::{Config, ExitPolicy, LogFormat, LogLevel};

/// Builds a config pointing at `server` and a cache file inside `dir`.
#[allow(dead_code)] // Used by other test files
pub fn create_test_config(server: &MockServer, dir: &TempDir, address: Option<&str>) -> Config {
    Config {
        address: address.map(str::to_string),
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        db_path: db_path(dir),
        endpoint: format!("{}/json/{{ip}}", server.uri()),
        timeout_seconds: Some(5),
        exit_policy: ExitPolicy::Compatible,
    }
}

#[allow(dead_code)] // Used by other test files
pub fn db_path(dir: &TempDir) -> PathBuf {
    dir.path().join("ip_cache.db")
}

/// A successful ip-api.com style body for `query`.
#[allow(dead_code)] // Used by other test files
pub fn success_body(query: &str) -> Value {
    json!({
        "status": "success",
        "country": "United States",
        "countryCode": "US",
        "region": "VA",
        "regionName": "Virginia",
        "city": "Ashburn",
        "zip": "20149",
        "lat": 39.03,
        "lon": -77.5,
        "timezone": "America/New_York",
        "isp": "Google LLC",
        "org": "Google Public DNS",
        "as": "AS15169 Google LLC",
        "query": query
    })
}

/// Mounts a success response for `address`, expecting exactly `calls` requests.
#[allow(dead_code)] // Used by other test files
pub async fn mock_success(server: &MockServer, address: &str, calls: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/json/{address}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body(address)))
        .expect(calls)
        .mount(server)
        .await;
}

/// Mounts a failure response carrying `message`, expecting exactly `calls` requests.
#[allow(dead_code)] // Used by other test files
pub async fn mock_failure(server: &MockServer, message: &str, calls: u64) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "fail",
            "message": message,
            "query": ""
        })))
        .expect(calls)
        .mount(server)
        .await;
}

/// Fails the test if the lookup service is contacted at all.
#[allow(dead_code)] // Used by other test files
pub async fn forbid_requests(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// Opens the cache file written by a run.
#[allow(dead_code)] // Used by other test files
pub async fn open_cache_db(db_path: &Path) -> SqlitePool {
    SqlitePool::connect(&format!("sqlite:{}", db_path.to_string_lossy()))
        .await
        .expect("Failed to open cache database")
}

/// Counts rows for `address` in the cache file.
#[allow(dead_code)] // Used by other test files
pub async fn count_rows(db_path: &Path, address: &str) -> i64 {
    let pool = open_cache_db(db_path).await;
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ip_cache WHERE ip = ?")
        .bind(address)
        .fetch_one(&pool)
        .await
        .expect("Failed to count cache rows");
    pool.close().await;
    count
}

/// Writes a cached record for `address` stamped `last_updated`.
#[allow(dead_code)] // Used by other test files
pub async fn seed_cache(db_path: &Path, address: &str, city: &str, last_updated: i64) {
    let cache = check_ip::storage::IpCache::open(db_path)
        .await
        .expect("Failed to open cache");
    cache
        .upsert(&check_ip::storage::AddressRecord {
            address: address.to_string(),
            country: "United States".into(),
            region: "Virginia".into(),
            city: city.to_string(),
            isp: "Google LLC".into(),
            org: "Google Public DNS".into(),
            as_number: "AS15169 Google LLC".into(),
            timezone: "America/New_York".into(),
            latitude: 39.03,
            longitude: -77.5,
            last_updated,
        })
        .await
        .expect("Failed to seed cache");
    cache.close().await;
}
