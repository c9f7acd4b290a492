// src/reverse.rs
use crate::client::GeocodeClient;
use crate::error::GeocodeError;
use crate::models::{Coordinates, GeocodeResult};

impl GeocodeClient {
    /// Resolves coordinates to a place label.
    ///
    /// `zoom` is the level of detail (conventionally 0-18) and is forwarded
    /// unchecked. Outcomes are the same as [`GeocodeClient::geocode`].
    pub async fn reverse_geocode(
        &self,
        lat: f64,
        lon: f64,
        zoom: Option<u8>,
    ) -> Result<Option<GeocodeResult>, GeocodeError> {
        let mut params = vec![("lat", lat.to_string()), ("lon", lon.to_string())];
        if let Some(zoom) = zoom {
            params.push(("zoom", zoom.to_string()));
        }
        self.envelope("/reverse", &params)
            .await
            .into_record("result")
    }

    pub async fn reverse_geocode_point(
        &self,
        point: Coordinates,
        zoom: Option<u8>,
    ) -> Result<Option<GeocodeResult>, GeocodeError> {
        self.reverse_geocode(point.lat, point.lon, zoom).await
    }
}
