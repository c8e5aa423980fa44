//! Error types for the MQ on Cloud SDK
//!
//! Every public operation returns `Result<T, Error>` where Error is defined here.
//! Errors that were produced after a response arrived keep the status code and
//! headers so callers can inspect the raw response regardless of classification.

use reqwest::header::HeaderMap;
use serde_json::Value;
use thiserror::Error;

/// The main error type for the SDK
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("Service URL is missing")]
    MissingServiceUrl,

    #[error("Missing required parameter: {name}")]
    MissingParameter { name: String },

    #[error("Invalid value for parameter '{name}': {message}")]
    InvalidParameter { name: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Context deadline exceeded")]
    DeadlineExceeded,

    #[error("Request cancelled")]
    Cancelled,

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Response Errors
    // ============================================================================
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        status: u16,
        message: String,
        /// Decoded error payload, when the body was JSON
        details: Option<Value>,
        headers: HeaderMap,
    },

    #[error("An error occurred while processing the operation response: {message}")]
    ResponseProcessing {
        status: u16,
        message: String,
        headers: HeaderMap,
    },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Error retrieving 'offset' query parameter from URL '{href}': {message}")]
    InvalidPaginationLink { href: String, message: String },

    #[error("No more results available")]
    NoMoreResults,

    // ============================================================================
    // Misc
    // ============================================================================
    #[error("Failed to serialize request: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a missing parameter error
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an HTTP status error without headers or payload
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            message: message.into(),
            details: None,
            headers: HeaderMap::new(),
        }
    }

    /// Status code of the response this error was produced from, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } | Error::ResponseProcessing { status, .. } => {
                Some(*status)
            }
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Headers of the response this error was produced from, if any
    pub fn headers(&self) -> Option<&HeaderMap> {
        match self {
            Error::HttpStatus { headers, .. } | Error::ResponseProcessing { headers, .. } => {
                Some(headers)
            }
            _ => None,
        }
    }

    /// Check if the caller's context ended the call
    pub fn is_context_error(&self) -> bool {
        matches!(self, Error::DeadlineExceeded | Error::Cancelled)
    }
}

/// Result type alias for the SDK
pub type Result<T> = std::result::Result<T, Error>;
