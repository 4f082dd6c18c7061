//! Remote address lookup against an ip-api.com compatible endpoint.

use log::debug;

use super::types::IpInfo;
use crate::config::{ENDPOINT_PLACEHOLDER, STATUS_SUCCESS};
use crate::error_handling::LookupError;

/// Client for the remote lookup service.
///
/// Performs a single GET per call. There is no retry; the request timeout is
/// whatever the wrapped `reqwest::Client` was built with.
#[derive(Debug, Clone)]
pub struct GeoIpClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GeoIpClient {
    /// `endpoint` is a URL template containing `{ip}`.
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn url_for(&self, address: &str) -> String {
        self.endpoint.replace(ENDPOINT_PLACEHOLDER, address)
    }

    /// Fetches metadata for `address`.
    ///
    /// # Errors
    ///
    /// - `LookupError::Request` if the request fails or the body is not valid JSON
    /// - `LookupError::Service` if the response `status` is not `"success"`
    pub async fn fetch(&self, address: &str) -> Result<IpInfo, LookupError> {
        let url = self.url_for(address);
        debug!("Fetching {address} from {url}");

        let info: IpInfo = self.client.get(&url).send().await?.json().await?;

        if info.status != STATUS_SUCCESS {
            debug!(
                "Lookup service returned status {:?} for {address}",
                info.status
            );
            let message = if info.message.is_empty() {
                "API error: unknown failure".to_string()
            } else {
                info.message
            };
            return Err(LookupError::Service(message));
        }

        Ok(info)
    }
}
