//! Source for generic configuration files.

use std::fmt;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use figment::value::{Dict, Map};
use figment::{Metadata, Profile, Provider};

use super::{figment_data, validate_path};
use crate::parser::{ElementParser, ElementParsers};
use crate::provider::ConfigFileProvider;
use crate::{ConfigurationData, XmlConfigResult};

/// A generic XML configuration file and the parsers that interpret it.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use ortho_config_xml::{AttributeSectionParser, ConfigFileSource, ElementParser};
///
/// # fn run() -> ortho_config_xml::XmlConfigResult<()> {
/// let parsers: Vec<Arc<dyn ElementParser>> = vec![Arc::new(AttributeSectionParser::new("section"))];
/// let source = ConfigFileSource::new("app.config.xml", false, parsers)?;
/// let mut provider = source.build();
/// let data = provider.load_file()?;
/// println!("{} entries", data.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ConfigFileSource {
    path: Utf8PathBuf,
    optional: bool,
    parsers: ElementParsers,
}

impl ConfigFileSource {
    /// Describe the file at `path`, interpreted by `parsers` in order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::XmlConfigError::InvalidArgument`] when `path` is
    /// empty, and [`crate::XmlConfigError::NotFound`] when the file is
    /// missing and `optional` is `false`.
    pub fn new<P, I>(path: P, optional: bool, parsers: I) -> XmlConfigResult<Self>
    where
        P: Into<Utf8PathBuf>,
        I: IntoIterator<Item = Arc<dyn ElementParser>>,
    {
        Ok(Self {
            path: validate_path(path.into(), optional)?,
            optional,
            parsers: parsers.into_iter().collect(),
        })
    }

    /// Path of the configuration file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Whether a missing file is tolerated.
    #[must_use]
    pub const fn optional(&self) -> bool {
        self.optional
    }

    /// Registered parsers in dispatch order.
    #[must_use]
    pub fn parsers(&self) -> &[Arc<dyn ElementParser>] {
        &self.parsers
    }

    /// Build an unloaded provider for this source.
    #[must_use]
    pub const fn build(&self) -> ConfigFileProvider<'_> {
        ConfigFileProvider::new(self)
    }

    fn load_data(&self) -> XmlConfigResult<ConfigurationData> {
        let mut provider = self.build();
        provider.load_file()?;
        Ok(provider.into_data().unwrap_or_default())
    }
}

impl fmt::Debug for ConfigFileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigFileSource")
            .field("path", &self.path)
            .field("optional", &self.optional)
            .field("parsers", &self.parsers.len())
            .finish()
    }
}

impl Provider for ConfigFileSource {
    fn metadata(&self) -> Metadata {
        Metadata::from("XML config file", self.path.as_std_path())
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        figment_data(self.load_data())
    }
}
