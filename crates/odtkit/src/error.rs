//! Error types for document assembly

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while assembling an ODT document
#[derive(Error, Debug)]
pub enum OdtError {
    /// List level index is not a positive integer
    #[error("Invalid level value: {0}")]
    InvalidLevel(u32),

    /// Bullet character outside the supported set
    #[error("Invalid bullet character value: {0:?}")]
    InvalidBulletChar(char),

    /// Unknown ruby position token
    #[error("Invalid ruby position value: {0}")]
    InvalidRubyPosition(String),

    /// Unknown ruby alignment token
    #[error("Invalid ruby alignment value: {0}")]
    InvalidRubyAlign(String),

    /// Color is not of the form `#rrggbb`
    #[error("Invalid color value: {0}")]
    InvalidColor(String),

    /// Image file could not be read
    #[error("Cannot open image {}: {source}", path.display())]
    ImageOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Level properties requested for a level that was never defined
    #[error("List level {0} has not been defined")]
    UnknownLevel(u32),

    /// Error raised by the element tree
    #[error("Document tree error: {0}")]
    Dom(#[from] odtkit_dom::DomError),

    /// Error reading or writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error writing the ZIP container
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Configuration serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result type for document assembly
pub type Result<T> = std::result::Result<T, OdtError>;
