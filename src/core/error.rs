//! Typed error handling for the vendo engine
//!
//! This module provides the error taxonomy shared by every connector built on
//! the engine, so callers can handle failure modes specifically rather than
//! dealing with generic error types.
//!
//! # Error Categories
//!
//! - [`VendoError::UnknownEntity`]: no descriptor registered for the name
//! - [`VendoError::MissingRequiredFilter`]: required/placeholder keys absent
//! - [`VendoError::HttpFailure`]: the transport returned a non-success status
//! - [`VendoError::ParseFailure`]: the response body is not valid JSON
//! - [`VendoError::Config`]: connector configuration could not be loaded
//! - [`VendoError::Transport`]: the transport collaborator itself failed
//!
//! Note the deliberate asymmetry: a response body that parses but does not
//! contain the declared root path is NOT an error. Vendor APIs legitimately
//! return heterogeneous envelopes for "no matching records", so shape
//! mismatches degrade to an empty record list instead of failing the call.
//!
//! # Example
//!
//! ```rust,ignore
//! match connector.get_entity("products", &[]).await {
//!     Ok(records) => println!("{} records", records.len()),
//!     Err(VendoError::MissingRequiredFilter { missing, .. }) => {
//!         println!("supply filters for: {}", missing.join(", "));
//!     }
//!     Err(e) => eprintln!("call failed: {}", e),
//! }
//! ```

use std::fmt;

/// The main error type for the vendo engine
#[derive(Debug)]
pub enum VendoError {
    /// No descriptor exists for the requested entity name
    UnknownEntity { entity: String },

    /// One or more required or placeholder filter keys are absent or blank
    ///
    /// `missing` enumerates every missing key, not just the first, so callers
    /// get a complete correction list in one round trip.
    MissingRequiredFilter {
        entity: String,
        missing: Vec<String>,
    },

    /// The transport returned a non-success status; the body is kept for
    /// diagnostics. The engine never retries.
    HttpFailure { status: u16, body: String },

    /// The response body is not valid JSON
    ParseFailure { message: String },

    /// Connector configuration could not be parsed or is invalid
    Config { message: String },

    /// The transport collaborator failed before producing a response
    Transport { message: String },
}

impl fmt::Display for VendoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VendoError::UnknownEntity { entity } => {
                write!(f, "Unknown entity: '{}'", entity)
            }
            VendoError::MissingRequiredFilter { entity, missing } => {
                write!(
                    f,
                    "Missing required filter(s) for '{}': {}",
                    entity,
                    missing.join(", ")
                )
            }
            VendoError::HttpFailure { status, body } => {
                write!(f, "HTTP request failed with status {}: {}", status, body)
            }
            VendoError::ParseFailure { message } => {
                write!(f, "Failed to parse response body: {}", message)
            }
            VendoError::Config { message } => {
                write!(f, "Configuration error: {}", message)
            }
            VendoError::Transport { message } => {
                write!(f, "Transport error: {}", message)
            }
        }
    }
}

impl std::error::Error for VendoError {}

impl VendoError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            VendoError::UnknownEntity { .. } => "UNKNOWN_ENTITY",
            VendoError::MissingRequiredFilter { .. } => "MISSING_REQUIRED_FILTER",
            VendoError::HttpFailure { .. } => "HTTP_FAILURE",
            VendoError::ParseFailure { .. } => "PARSE_FAILURE",
            VendoError::Config { .. } => "CONFIG_ERROR",
            VendoError::Transport { .. } => "TRANSPORT_ERROR",
        }
    }

    /// Whether the error was raised before any network call was made
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            VendoError::UnknownEntity { .. } | VendoError::MissingRequiredFilter { .. }
        )
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for VendoError {
    fn from(err: serde_json::Error) -> Self {
        VendoError::ParseFailure {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for VendoError {
    fn from(err: serde_yaml::Error) -> Self {
        VendoError::Config {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for VendoError {
    fn from(err: std::io::Error) -> Self {
        VendoError::Config {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "reqwest-transport")]
impl From<reqwest::Error> for VendoError {
    fn from(err: reqwest::Error) -> Self {
        VendoError::Transport {
            message: err.to_string(),
        }
    }
}

/// A specialized Result type for vendo operations
pub type VendoResult<T> = Result<T, VendoError>;

// =============================================================================
// Tests
// =============================================================================
