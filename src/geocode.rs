// src/geocode.rs
use crate::client::GeocodeClient;
use crate::error::GeocodeError;
use crate::models::GeocodeResult;

impl GeocodeClient {
    /// Geocodes a free-text place description to its best match.
    ///
    /// # Returns
    /// * `Ok(Some(result))` when the server found a match.
    /// * `Ok(None)` when the server reported failure or sent no `result`.
    /// * `Err(_)` when the request failed or the `result` could not be decoded.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use quick_geocode::{GeocodeClient, GeocodeError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), GeocodeError> {
    /// let client = GeocodeClient::new("http://localhost:3000")?;
    /// match client.geocode("Paris, France").await? {
    ///     Some(place) => println!("{},{}", place.lat, place.lon),
    ///     None => println!("no match"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn geocode(&self, query: &str) -> Result<Option<GeocodeResult>, GeocodeError> {
        let params = [("query", query.to_string())];
        self.envelope("/geocode", &params)
            .await
            .into_record("result")
    }

    /// Searches for every match of `query`, in the order the server ranks them.
    ///
    /// `limit` is passed to the server as-is; no truncation happens locally.
    /// A failed envelope or a missing `results` list gives an empty `Vec`.
    pub async fn geocode_search(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> Result<Vec<GeocodeResult>, GeocodeError> {
        let mut params = vec![("query", query.to_string())];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        self.envelope("/geocode/search", &params)
            .await
            .into_records("results")
    }
}
