//! Error types for the image component
//!
//! Most of these never reach a caller: the component logs and swallows them so that
//! malformed input degrades to "no effect". They exist so parsers can report what went
//! wrong and so the binary can surface configuration problems.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the image component
#[derive(Debug, Error)]
pub enum ImageWidgetError {
    /// A `src` or placeholder reference could not be turned into a usable reference
    #[error("Malformed source reference: {0}")]
    MalformedSource(String),

    /// A length value could not be parsed or used in this position
    #[error("Invalid length: {0}")]
    InvalidLength(String),

    /// A filter specification could not be parsed
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for image component operations
pub type Result<T> = std::result::Result<T, ImageWidgetError>;

/// Convert an error to a user-friendly message
///
/// Used by the scenario binary when reporting a failure on stderr.
pub fn get_user_friendly_error(error: &ImageWidgetError) -> String {
    match error {
        ImageWidgetError::MalformedSource(src) => {
            format!(
                "The image source \"{src}\" is not a valid reference.\n\n\
                 Use an absolute URI (https://, file://, data:) or a path."
            )
        }
        ImageWidgetError::InvalidLength(value) => {
            format!(
                "\"{value}\" is not a valid length.\n\n\
                 Lengths are numbers optionally followed by px, dp or %."
            )
        }
        ImageWidgetError::InvalidFilter(spec) => {
            format!(
                "The filter \"{spec}\" could not be parsed.\n\n\
                 Only blur(<length>) is supported, e.g. blur(5px)."
            )
        }
        ImageWidgetError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             Default layout and night-mode settings will be used."
            .to_string(),
        ImageWidgetError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check the file path and permissions."
            )
        }
        ImageWidgetError::JsonError(e) => {
            format!(
                "A JSON document is malformed:\n\n{e}\n\n\
                 Please check the scenario or configuration file."
            )
        }
    }
}
