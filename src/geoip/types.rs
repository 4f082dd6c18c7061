//! GeoIP data structures.

use serde::{Deserialize, Serialize};

/// Geolocation and ISP metadata for one address.
///
/// This is both the shape of the remote service response and the printed
/// result, so field names and order follow the ip-api.com JSON format. Every
/// field has a default because failure responses only carry `status`,
/// `message` and `query`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpInfo {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub country: String,
    #[serde(rename = "regionName", default)]
    pub region_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub isp: String,
    #[serde(default)]
    pub org: String,
    #[serde(rename = "as", default)]
    pub asn: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    /// UTC seconds since epoch at which the record was cached
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: i64,
}
