//! Error types for the cinedb client library
//!
//! Every failure in this library is scoped to a single request or cache key;
//! nothing here is fatal to the process. Errors are `Clone` so a single
//! failed network call can be fanned out to every caller attached to the
//! same in-flight request.

use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the cinedb client library
///
/// Errors are categorized into five types:
/// - Network: transport-level failures with no HTTP response
/// - Http: a response arrived with a non-2xx status
/// - InvalidResponse: the body did not match the expected shape
/// - EmptyResult: well-formed response with zero usable items
/// - InvalidConfiguration: bad credentials or endpoints at composition time
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Transport failure (DNS, connection refused, timeout)
    #[error("network error: {message}")]
    Network { message: String },

    /// Non-2xx HTTP response from the remote API
    #[error("HTTP {status} from {endpoint}")]
    Http { status: u16, endpoint: String },

    /// Response body did not match the expected contract
    #[error("invalid response from {endpoint}: {message}")]
    InvalidResponse { endpoint: String, message: String },

    /// Well-formed response but no usable items after filtering
    #[error("no usable results from {endpoint}")]
    EmptyResult { endpoint: String },

    /// Invalid client configuration (missing API key, malformed base URL)
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl Error {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn http(status: u16, endpoint: impl Into<String>) -> Self {
        Self::Http {
            status,
            endpoint: endpoint.into(),
        }
    }

    pub fn invalid_response(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    pub fn empty_result(endpoint: impl Into<String>) -> Self {
        Self::EmptyResult {
            endpoint: endpoint.into(),
        }
    }

    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Whether a retry of the same request could reasonably succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Http { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}
