//! Error types for a11ylens
//!
//! The analysis engine itself never fails. Errors only arise at the
//! boundaries: loading configuration, reading a document, talking to a
//! driving UI over the transport, and writing reports.

use thiserror::Error;

/// Main error type for a11ylens
#[derive(Error, Debug)]
pub enum A11yLensError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Document loading errors
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Transport errors between a driving UI and the page session
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Report output errors
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// Errors that occur while loading or writing configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        /// Path to the configuration file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Unknown preset name
    #[error("Unknown preset '{0}'. Valid presets: baseline, wcag-aa, wcag-aaa")]
    UnknownPreset(String),

    /// Config file already present and overwrite not requested
    #[error("Configuration file '{0}' already exists. Use --force to overwrite.")]
    AlreadyExists(String),
}

/// Errors that occur while loading a document to inspect
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Failed to read the document source
    #[error("Failed to read document '{path}': {source}")]
    Read {
        /// Path of the document ("-" for stdin)
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

/// Errors on the request/response channel
#[derive(Error, Debug)]
pub enum TransportError {
    /// A request could not be decoded
    #[error("Invalid request: {0}")]
    InvalidRequest(#[source] serde_json::Error),

    /// A response could not be encoded
    #[error("Failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),

    /// The channel itself failed
    #[error("Channel I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while rendering or writing reports
#[derive(Error, Debug)]
pub enum OutputError {
    /// JSON serialization failed
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to write the report file
    #[error("Failed to write '{path}': {source}")]
    FileWrite {
        /// Destination path
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

impl From<serde_json::Error> for A11yLensError {
    fn from(err: serde_json::Error) -> Self {
        A11yLensError::Output(OutputError::Serialize(err))
    }
}
