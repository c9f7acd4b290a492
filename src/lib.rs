pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod geocode;
pub mod ip;
pub mod models;
pub mod render;
pub mod requests;
pub mod reverse;

pub use client::{GeocodeClient, GeocodeClientBuilder};
pub use config::ClientConfig;
pub use error::GeocodeError;
pub use models::{ApiInfo, BoundingBox, Coordinates, GeocodeResult, IpLookupResult};
pub use requests::ApiResponse;

/// Geocodes `query` with a one-off client for `base_url`.
pub async fn geocode(query: &str, base_url: &str) -> Result<Option<GeocodeResult>, GeocodeError> {
    GeocodeClient::new(base_url)?.geocode(query).await
}

/// Reverse geocodes a coordinate pair with a one-off client for `base_url`.
pub async fn reverse_geocode(
    lat: f64,
    lon: f64,
    base_url: &str,
) -> Result<Option<GeocodeResult>, GeocodeError> {
    GeocodeClient::new(base_url)?
        .reverse_geocode(lat, lon, None)
        .await
}

/// Looks up `ip` (or the caller's own address) with a one-off client for `base_url`.
pub async fn lookup_ip(
    ip: Option<&str>,
    base_url: &str,
) -> Result<Option<IpLookupResult>, GeocodeError> {
    GeocodeClient::new(base_url)?.lookup_ip(ip).await
}
