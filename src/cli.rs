// src/cli.rs
//! Command-line front end: flag definitions, dispatch and exit codes.

use crate::client::GeocodeClient;
use crate::config::{ClientConfig, DEFAULT_BASE_URL, ENV_SERVER};
use crate::error::GeocodeError;
use crate::render::{self, OutputFormat};

use clap::{CommandFactory, Parser};
use std::io::Write;
use std::process::ExitCode;
use thiserror::Error;

const EXAMPLES: &str = "\
Examples:
  quick-geocode \"Sydney, Australia\"
  quick-geocode --reverse --lat 48.8584 --lon 2.2945
  quick-geocode --ip 8.8.8.8
  quick-geocode --server http://api.example.com \"Paris, France\"";

/// quick-geocode command-line client
#[derive(Parser, Debug, Clone)]
#[command(name = "quick-geocode")]
#[command(version)]
#[command(about = "quick-geocode API client", long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// API server URL
    #[arg(long, env = ENV_SERVER, default_value = DEFAULT_BASE_URL)]
    pub server: String,

    /// Place name to geocode
    pub query: Option<String>,

    /// Reverse geocode coordinates (requires --lat and --lon)
    #[arg(long)]
    pub reverse: bool,

    /// Latitude for reverse geocoding
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude for reverse geocoding
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Zoom level for reverse geocoding (0-18)
    #[arg(long)]
    pub zoom: Option<u8>,

    /// IP address to look up (omit the value for the current IP)
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    pub ip: Option<String>,

    /// Search for multiple results
    #[arg(long)]
    pub search: bool,

    /// Limit number of search results (non-negative; passed to the server as-is)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Suppress error messages
    #[arg(long)]
    pub quiet: bool,
}

/// The single operation an invocation maps to.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Reverse { lat: f64, lon: f64, zoom: Option<u8> },
    /// `--reverse` without both coordinates.
    MissingCoordinates,
    Ip(Option<String>),
    Search { query: String, limit: Option<u32> },
    Geocode(String),
    Help,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is unset. `--quiet` silences library
    /// warnings as well as the human-readable messages.
    pub fn default_log_filter(&self) -> &'static str {
        if self.quiet {
            "off"
        } else {
            "warn"
        }
    }

    /// Picks the operation by precedence: reverse, then ip, then query.
    pub fn action(&self) -> Action {
        if self.reverse {
            return match (self.lat, self.lon) {
                (Some(lat), Some(lon)) => Action::Reverse {
                    lat,
                    lon,
                    zoom: self.zoom,
                },
                _ => Action::MissingCoordinates,
            };
        }
        if let Some(ip) = &self.ip {
            let ip = Some(ip.clone()).filter(|ip| !ip.is_empty());
            return Action::Ip(ip);
        }
        match &self.query {
            Some(query) if !query.is_empty() => {
                if self.search {
                    Action::Search {
                        query: query.clone(),
                        limit: self.limit,
                    }
                } else {
                    Action::Geocode(query.clone())
                }
            }
            _ => Action::Help,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success,
    Failure,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        match exit {
            Exit::Success => ExitCode::SUCCESS,
            Exit::Failure => ExitCode::from(1),
        }
    }
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs one invocation, writing results to `out` and diagnostics to `err`.
///
/// Returns [`Exit::Success`] only when the server was reachable and the
/// operation produced a result.
pub async fn run<O: Write, E: Write>(cli: &Cli, out: &mut O, err: &mut E) -> Exit {
    let action = cli.action();
    match action {
        Action::Help => {
            let help = Cli::command().render_help().to_string();
            let _ = writeln!(out, "{}", help);
            return Exit::Failure;
        }
        Action::MissingCoordinates => {
            report(
                cli,
                err,
                "Error: --lat and --lon are required for reverse geocoding",
            );
            return Exit::Failure;
        }
        _ => {}
    }

    // The flag (or its env fallback) always decides the server.
    let client = match ClientConfig::from_env().and_then(|config| {
        GeocodeClient::from_config(ClientConfig {
            base_url: cli.server.clone(),
            ..config
        })
    }) {
        Ok(client) => client,
        Err(e) => {
            report(cli, err, &format!("Error: {}", e));
            return Exit::Failure;
        }
    };

    if !client.health_check().await {
        report(
            cli,
            err,
            &format!("Error: Cannot connect to server at {}", cli.server),
        );
        return Exit::Failure;
    }

    match execute(&client, &action, cli.format, out).await {
        Ok(true) => Exit::Success,
        Ok(false) => {
            let message = match action {
                Action::Ip(_) => "IP lookup failed",
                _ => "No results found",
            };
            report(cli, err, message);
            Exit::Failure
        }
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            report(cli, err, &format!("Error: {}", e));
            Exit::Failure
        }
    }
}

// Ok(false) means the server answered but had nothing to return.
async fn execute<O: Write>(
    client: &GeocodeClient,
    action: &Action,
    format: OutputFormat,
    out: &mut O,
) -> Result<bool, CliError> {
    let rendered = match action {
        Action::Reverse { lat, lon, zoom } => client
            .reverse_geocode(*lat, *lon, *zoom)
            .await?
            .map(|result| render::place(&result, format))
            .transpose()?,
        Action::Ip(ip) => client
            .lookup_ip(ip.as_deref())
            .await?
            .map(|result| render::ip(&result, format))
            .transpose()?,
        Action::Search { query, limit } => {
            let results = client.geocode_search(query, *limit).await?;
            if results.is_empty() {
                None
            } else {
                Some(render::places(&results, format)?)
            }
        }
        Action::Geocode(query) => client
            .geocode(query)
            .await?
            .map(|result| render::place(&result, format))
            .transpose()?,
        Action::Help | Action::MissingCoordinates => None,
    };

    match rendered {
        Some(text) => {
            writeln!(out, "{}", text)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Writes a human-readable diagnostic unless `--quiet` was given.
pub fn report<E: Write>(cli: &Cli, err: &mut E, message: &str) {
    if !cli.quiet {
        let _ = writeln!(err, "{}", message);
    }
}
