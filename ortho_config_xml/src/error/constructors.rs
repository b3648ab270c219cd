//! Constructors shared by sources and providers.

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};

use super::XmlConfigError;
use crate::xml::XmlParseError;

impl XmlConfigError {
    /// Construct an [`XmlConfigError::InvalidArgument`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ortho_config_xml::XmlConfigError;
    /// let err = XmlConfigError::invalid_argument("path", "must not be empty");
    /// assert!(matches!(err, XmlConfigError::InvalidArgument { name: "path", .. }));
    /// ```
    #[must_use]
    pub fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    /// Construct an [`XmlConfigError::NotFound`] for `path`.
    #[must_use]
    pub fn not_found(path: impl Into<Utf8PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Construct an [`XmlConfigError::DuplicateKey`].
    #[must_use]
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }

    /// Returns `true` when the error reports a missing file, whether raised
    /// at registration or surfaced by the filesystem while loading.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::File { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

pub(crate) fn file_error(path: &Utf8Path, source: std::io::Error) -> Arc<XmlConfigError> {
    Arc::new(XmlConfigError::File {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn malformed_xml(path: &Utf8Path, source: XmlParseError) -> Arc<XmlConfigError> {
    Arc::new(XmlConfigError::MalformedXml {
        path: path.to_path_buf(),
        source,
    })
}
