// src/ip.rs
use crate::client::GeocodeClient;
use crate::error::GeocodeError;
use crate::models::IpLookupResult;

impl GeocodeClient {
    /// Looks up the approximate location of an IP address.
    ///
    /// With `ip` set to `None` (or an empty string) no `ip` parameter is sent
    /// and the server resolves the caller's own address.
    pub async fn lookup_ip(&self, ip: Option<&str>) -> Result<Option<IpLookupResult>, GeocodeError> {
        let params: Vec<(&str, String)> = match ip {
            Some(address) if !address.is_empty() => vec![("ip", address.to_string())],
            _ => Vec::new(),
        };
        self.envelope("/ip", &params).await.into_record("result")
    }
}
