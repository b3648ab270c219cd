//! Extensions for moving between `XmlConfigResult` and Figment's error type.
//!
//! Providers hand their results to Figment, which only understands
//! [`figment::Error`]. These helpers keep the `map_err` noise out of the
//! provider implementations.
//!
//! # Examples
//!
//! ```
//! use ortho_config_xml::{IntoFigmentError, XmlConfigError};
//! use std::sync::Arc;
//!
//! let err = Arc::new(XmlConfigError::duplicate_key("Bob:(Default)"));
//! let figment_err = err.into_figment();
//! assert!(figment_err.to_string().contains("Bob:(Default)"));
//! ```

use std::sync::Arc;

use crate::{XmlConfigError, XmlConfigResult};

/// Convert shared errors into `figment::Error` for providers.
pub trait IntoFigmentError {
    /// Convert into a `figment::Error`, preserving message text.
    fn into_figment(self) -> figment::Error;
}

impl IntoFigmentError for Arc<XmlConfigError> {
    fn into_figment(self) -> figment::Error {
        match Arc::try_unwrap(self) {
            Ok(owned) => owned.into(),
            Err(shared) => figment::Error::from(shared.to_string()),
        }
    }
}

/// Hand an [`XmlConfigResult`] to Figment.
pub trait XmlConfigFigmentExt<T> {
    /// Convert an [`XmlConfigResult`] into a Figment result.
    ///
    /// # Errors
    ///
    /// Returns the converted error when `self` is `Err`.
    fn into_figment_result(self) -> Result<T, figment::Error>;
}

impl<T> XmlConfigFigmentExt<T> for XmlConfigResult<T> {
    fn into_figment_result(self) -> Result<T, figment::Error> {
        self.map_err(IntoFigmentError::into_figment)
    }
}
