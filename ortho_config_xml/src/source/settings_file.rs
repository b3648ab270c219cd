//! Source for settings files.

use camino::{Utf8Path, Utf8PathBuf};
use figment::value::{Dict, Map};
use figment::{Metadata, Profile, Provider};

use super::{figment_data, validate_path};
use crate::provider::SettingsFileProvider;
use crate::{ConfigurationData, XmlConfigResult};

/// A settings file of `Setting`/`Value` elements keyed by profile.
#[derive(Debug, Clone)]
pub struct SettingsFileSource {
    path: Utf8PathBuf,
    optional: bool,
}

impl SettingsFileSource {
    /// Describe the settings file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::XmlConfigError::InvalidArgument`] when `path` is
    /// empty, and [`crate::XmlConfigError::NotFound`] when the file is
    /// missing and `optional` is `false`.
    pub fn new<P: Into<Utf8PathBuf>>(path: P, optional: bool) -> XmlConfigResult<Self> {
        Ok(Self {
            path: validate_path(path.into(), optional)?,
            optional,
        })
    }

    /// Path of the settings file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Whether a missing file is tolerated.
    #[must_use]
    pub const fn optional(&self) -> bool {
        self.optional
    }

    /// Build an unloaded provider for this source.
    #[must_use]
    pub const fn build(&self) -> SettingsFileProvider<'_> {
        SettingsFileProvider::new(self)
    }

    fn load_data(&self) -> XmlConfigResult<ConfigurationData> {
        let mut provider = self.build();
        provider.load_file()?;
        Ok(provider.into_data().unwrap_or_default())
    }
}

impl Provider for SettingsFileSource {
    fn metadata(&self) -> Metadata {
        Metadata::from("XML settings file", self.path.as_std_path())
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        figment_data(self.load_data())
    }
}
