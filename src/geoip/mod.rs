//! GeoIP lookup via a remote JSON service.
//!
//! - `types`: the `IpInfo` record exchanged with the service and printed to stdout
//! - `lookup`: the HTTP client performing the single remote call

mod lookup;
mod types;

pub use lookup::GeoIpClient;
pub use types::IpInfo;
