// src/render.rs
//! Output formatting for the command-line tool.

use crate::models::{GeocodeResult, IpLookupResult};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One JSON document per invocation
    #[default]
    Json,
    /// Comma-separated fields, one line per result
    Simple,
}

#[derive(Serialize)]
struct PlaceLine<'a> {
    lat: f64,
    lon: f64,
    label: &'a str,
}

impl<'a> From<&'a GeocodeResult> for PlaceLine<'a> {
    fn from(result: &'a GeocodeResult) -> Self {
        PlaceLine {
            lat: result.lat,
            lon: result.lon,
            label: &result.label,
        }
    }
}

// Absent fields serialize as `null`.
#[derive(Serialize)]
struct IpLine<'a> {
    lat: f64,
    lon: f64,
    city: Option<&'a str>,
    region: Option<&'a str>,
    country: Option<&'a str>,
    postal: Option<&'a str>,
    timezone: Option<&'a str>,
}

pub fn place(result: &GeocodeResult, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Simple => Ok(simple_place(result)),
        OutputFormat::Json => serde_json::to_string(&PlaceLine::from(result)),
    }
}

/// Renders search results: one simple line per result, or a single JSON array.
pub fn places(results: &[GeocodeResult], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Simple => Ok(results
            .iter()
            .map(simple_place)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let lines: Vec<PlaceLine<'_>> = results.iter().map(PlaceLine::from).collect();
            serde_json::to_string(&lines)
        }
    }
}

pub fn ip(result: &IpLookupResult, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Simple => Ok(format!(
            "{},{},{},{}",
            result.lat,
            result.lon,
            result.city.as_deref().unwrap_or_default(),
            result.country.as_deref().unwrap_or_default()
        )),
        OutputFormat::Json => serde_json::to_string(&IpLine {
            lat: result.lat,
            lon: result.lon,
            city: result.city.as_deref(),
            region: result.region.as_deref(),
            country: result.country.as_deref(),
            postal: result.postal.as_deref(),
            timezone: result.timezone.as_deref(),
        }),
    }
}

fn simple_place(result: &GeocodeResult) -> String {
    format!("{},{},{}", result.lat, result.lon, result.label)
}
