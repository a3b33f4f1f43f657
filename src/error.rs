// src/error.rs
//
// One enum per pipeline stage. Everything here is recoverable:
// the session reports it and goes back to the prompt.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP error: {status} {url}")]
    Status { url: String, status: reqwest::StatusCode },
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("table not found")]
    TableNotFound,
    #[error("bad selector {selector:?}: {reason}")]
    Selector { selector: &'static str, reason: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("row {row}: missing field `{field}`")]
    Missing { row: usize, field: &'static str },
    #[error("row {row}: field `{field}` is not a number: {value:?}")]
    NotNumeric {
        row: usize,
        field: &'static str,
        value: String,
    },
}

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("could not locate chart viewer: {0}")]
    Locate(#[source] std::io::Error),
    #[error("could not launch {path}: {source}")]
    Launch {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not encode chart data: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("could not hand chart data to viewer: {0}")]
    Handoff(#[source] std::io::Error),
}

/// Anything that ends one fetch → plot cycle early.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Present(#[from] PresentError),
}
