//! Registration of XML sources on a [`Figment`].

use std::sync::Arc;

use camino::Utf8PathBuf;
use figment::Figment;
use tracing::debug;

use crate::parser::ElementParser;
use crate::source::{ConfigFileSource, SettingsFileSource};
use crate::XmlConfigResult;

/// Adds XML sources to a configuration builder.
///
/// Registration validates the path immediately. Loading happens when the
/// builder merges the source, and any load failure (malformed XML, duplicate
/// keys) is reported by the builder when values are extracted.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use figment::Figment;
/// use ortho_config_xml::{AttributeSectionParser, ElementParser, XmlFigmentExt};
///
/// # fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let sections: Arc<dyn ElementParser> = Arc::new(AttributeSectionParser::new("section"));
/// let figment = Figment::new()
///     .add_settings_file("Settings.settings", false)?
///     .add_config_file("app.config.xml", true, [sections])?;
/// let name: String = figment.extract_inner("Bob.(Default)")?;
/// # Ok(())
/// # }
/// ```
pub trait XmlFigmentExt: Sized {
    /// Merge a generic configuration file interpreted by `parsers`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::XmlConfigError::InvalidArgument`] for an empty path
    /// and [`crate::XmlConfigError::NotFound`] for a missing required file.
    fn add_config_file<P, I>(self, path: P, optional: bool, parsers: I) -> XmlConfigResult<Self>
    where
        P: Into<Utf8PathBuf>,
        I: IntoIterator<Item = Arc<dyn ElementParser>>;

    /// Merge a settings file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::XmlConfigError::InvalidArgument`] for an empty path
    /// and [`crate::XmlConfigError::NotFound`] for a missing required file.
    fn add_settings_file<P>(self, path: P, optional: bool) -> XmlConfigResult<Self>
    where
        P: Into<Utf8PathBuf>;
}

impl XmlFigmentExt for Figment {
    fn add_config_file<P, I>(self, path: P, optional: bool, parsers: I) -> XmlConfigResult<Self>
    where
        P: Into<Utf8PathBuf>,
        I: IntoIterator<Item = Arc<dyn ElementParser>>,
    {
        let source = ConfigFileSource::new(path, optional, parsers)?;
        debug!(
            path = %source.path(),
            optional,
            parsers = source.parsers().len(),
            "registering XML config file"
        );
        Ok(self.merge(source))
    }

    fn add_settings_file<P>(self, path: P, optional: bool) -> XmlConfigResult<Self>
    where
        P: Into<Utf8PathBuf>,
    {
        let source = SettingsFileSource::new(path, optional)?;
        debug!(path = %source.path(), optional, "registering XML settings file");
        Ok(self.merge(source))
    }
}
