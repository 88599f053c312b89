//! Error types for PMS API calls.
//!
//! Every variant carries the endpoint label (`"GET /searchSuite/3"`) so a
//! logged failure identifies the call site without a backtrace.

use thiserror::Error;

/// Errors from PMS API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: connection refused, timeout, TLS.
    #[error("transport error calling {endpoint}: {source}")]
    Http {
        /// The endpoint label, e.g. `"POST /entrada"`.
        endpoint: String,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Api {
        /// The endpoint label.
        endpoint: String,
        /// The HTTP status code.
        status: u16,
        /// The response body, verbatim.
        body: String,
    },

    /// The response body could not be decoded into the expected type.
    #[error("failed to decode response from {endpoint}: {source}")]
    Deserialization {
        /// The endpoint label.
        endpoint: String,
        /// The underlying decode error.
        #[source]
        source: reqwest::Error,
    },

    /// Client construction or configuration failure.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl ApiError {
    /// The HTTP status code, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
