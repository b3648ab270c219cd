//! Conversion from `XmlConfigError` into Figment's error type.

use figment::Error as FigmentError;

use super::XmlConfigError;

impl From<XmlConfigError> for FigmentError {
    /// Allow `?` in provider code that must return `figment::Error`.
    fn from(e: XmlConfigError) -> Self {
        Self::from(e.to_string())
    }
}
