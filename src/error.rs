//! Error handling for fleet list loading and querying.
//!
//! Only two kinds of failure ever leave the library: the raw fleet list could
//! not be retrieved, or the caller supplied configuration/arguments that make
//! no sense. Malformed rows and out-of-range pages are not errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FleetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch fleet data from {source_name}: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FleetError {
    /// Create a source-unavailable error for the named source
    pub fn source_unavailable(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Whether this error means the dataset never loaded
    pub fn is_source_failure(&self) -> bool {
        matches!(
            self,
            Self::SourceUnavailable { .. } | Self::Http(_) | Self::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FleetError>;
