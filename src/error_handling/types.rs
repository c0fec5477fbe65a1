//! Error type definitions.
//!
//! This module defines the lookup failure taxonomy and the startup errors.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Reasons a lookup can fail.
///
/// The `Display` output of each variant is the exact reason string reported
/// to the caller. Every variant is terminal: nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The address failed the syntactic check; no request was made.
    #[error("Invalid email format")]
    InvalidInput,

    /// Transport failure (connect, DNS, timeout, TLS, body read).
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream answered with a status other than 200.
    #[error("LeakCheck HTTP {0} response")]
    HttpStatus(u16),

    /// The response body was not JSON.
    #[error("Invalid JSON response from LeakCheck")]
    InvalidJson,

    /// The response was JSON but not an object.
    #[error("Unexpected response format from LeakCheck")]
    UnexpectedFormat,

    /// Upstream reported `success` missing or false.
    #[error("LeakCheck returned success = false (no data or invalid query)")]
    UpstreamRejected,
}

/// Classification of a [`LookupError`], one per taxonomy entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    InvalidInput,
    NetworkError,
    HttpStatusError,
    JsonParseError,
    ShapeError,
    UpstreamRejected,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::InvalidInput => "invalid input",
            FailureKind::NetworkError => "network error",
            FailureKind::HttpStatusError => "HTTP status error",
            FailureKind::JsonParseError => "JSON parse error",
            FailureKind::ShapeError => "unexpected response shape",
            FailureKind::UpstreamRejected => "upstream rejected query",
        }
    }
}

impl LookupError {
    /// Returns the taxonomy entry this error belongs to.
    pub fn kind(&self) -> FailureKind {
        match self {
            LookupError::InvalidInput => FailureKind::InvalidInput,
            LookupError::Network(_) => FailureKind::NetworkError,
            LookupError::HttpStatus(_) => FailureKind::HttpStatusError,
            LookupError::InvalidJson => FailureKind::JsonParseError,
            LookupError::UnexpectedFormat => FailureKind::ShapeError,
            LookupError::UpstreamRejected => FailureKind::UpstreamRejected,
        }
    }
}

/// The failure value handed to callers: a reason and nothing else.
///
/// Serializes as `{"error": "<reason>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupFailure {
    #[serde(rename = "error")]
    pub reason: String,
}

impl From<LookupError> for LookupFailure {
    fn from(error: LookupError) -> Self {
        Self {
            reason: error.to_string(),
        }
    }
}

impl std::fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for LookupFailure {}
