//! Primary error enum for XML configuration sources and providers.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::xml::XmlParseError;

/// Errors that can occur while registering or loading XML configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum XmlConfigError {
    /// A registration argument was rejected before any file access.
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// Human-readable explanation of the rejection.
        message: String,
    },

    /// A required configuration file does not exist.
    #[error("Configuration file '{path}' was not found and is not optional")]
    NotFound {
        /// Path that was expected to exist.
        path: Utf8PathBuf,
    },

    /// Reading a configuration file failed.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed XML.
    #[error("Malformed XML in '{path}': {source}")]
    MalformedXml {
        /// Path of the source the document belongs to.
        path: Utf8PathBuf,
        /// Parser failure describing the malformation.
        #[source]
        source: XmlParseError,
    },

    /// Two entries resolved to the same case-insensitive key.
    #[error("An entry with the key '{key}' has already been added")]
    DuplicateKey {
        /// Key that was inserted twice.
        key: String,
    },
}
