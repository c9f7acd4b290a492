// src/error.rs
use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("HTTP request failed: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("URL parsing failed: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("JSON processing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed result payload: {0}")]
    MalformedResult(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(InvalidHeaderValue),
}

impl GeocodeError {
    /// Generic label stored in the envelope's `message` when a request fails.
    pub fn category(&self) -> &'static str {
        match self {
            GeocodeError::ReqwestError(_) | GeocodeError::HttpStatus { .. } => {
                "Network error occurred"
            }
            GeocodeError::JsonError(_) | GeocodeError::MalformedResult(_) => {
                "Invalid response received"
            }
            _ => "Unexpected error occurred",
        }
    }

    /// Builds an `HttpStatus` error, keeping only a short snippet of the body.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let snippet: String = body.chars().take(100).collect();
        GeocodeError::HttpStatus {
            status,
            body: if snippet.is_empty() {
                "<empty body>".to_string()
            } else {
                snippet
            },
        }
    }
}
