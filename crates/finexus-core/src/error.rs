//! Error types for Finexus

use thiserror::Error;

/// Main error type for Finexus operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinexusError {
    /// Transport failure: connection refused, DNS, reset
    #[error("Network error: {0}")]
    Network(String),

    /// Request did not complete within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Server answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// Response body was not JSON or had the wrong shape
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Text entered in a number field could not be read as a number
    #[error("'{input}' is not a valid number for {field}")]
    Coercion { field: String, input: String },

    /// Draft key that is not part of the form's field schema
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Category name that is not one of the five known categories
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// A submission for this section is already in flight
    #[error("A submission is already in progress")]
    SubmitInFlight,
}

impl FinexusError {
    /// Whether a section should keep running (stale list + banner) after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            FinexusError::Network(_)
                | FinexusError::Timeout(_)
                | FinexusError::Status { .. }
                | FinexusError::Malformed(_)
        )
    }
}

impl From<serde_json::Error> for FinexusError {
    fn from(err: serde_json::Error) -> Self {
        FinexusError::Malformed(err.to_string())
    }
}

/// Result type alias using FinexusError
pub type FinexusResult<T> = Result<T, FinexusError>;
