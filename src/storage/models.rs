// storage/models.rs
// Cache row model

use crate::config::STATUS_SUCCESS;
use crate::geoip::IpInfo;

/// One row of the `ip_cache` table.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressRecord {
    pub address: String,
    pub country: String,
    pub region: String,
    pub city: String,
    pub isp: String,
    pub org: String,
    pub as_number: String,
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
    /// UTC seconds since epoch
    pub last_updated: i64,
}

impl AddressRecord {
    /// Builds a row from a successful lookup, stamped with `now`.
    pub fn from_info(info: &IpInfo, now: i64) -> Self {
        Self {
            address: info.query.clone(),
            country: info.country.clone(),
            region: info.region_name.clone(),
            city: info.city.clone(),
            isp: info.isp.clone(),
            org: info.org.clone(),
            as_number: info.asn.clone(),
            timezone: info.timezone.clone(),
            latitude: info.lat,
            longitude: info.lon,
            last_updated: now,
        }
    }

    /// Age in seconds relative to `now`.
    pub fn age_secs(&self, now: i64) -> i64 {
        now - self.last_updated
    }

    /// A record is fresh while its age is strictly below `ttl_secs`.
    pub fn is_fresh(&self, now: i64, ttl_secs: i64) -> bool {
        self.age_secs(now) < ttl_secs
    }

    /// Converts a cached row back into the printable form.
    ///
    /// Cached rows are always reported with status `success` and an empty message.
    pub fn into_info(self) -> IpInfo {
        IpInfo {
            query: self.address,
            country: self.country,
            region_name: self.region,
            city: self.city,
            isp: self.isp,
            org: self.org,
            asn: self.as_number,
            timezone: self.timezone,
            lat: self.latitude,
            lon: self.longitude,
            status: STATUS_SUCCESS.to_string(),
            message: String::new(),
            last_updated: self.last_updated,
        }
    }
}
