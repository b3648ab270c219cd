//! Provider for settings files carrying per-profile values.

use std::io::Read;

use tracing::{debug, trace};

use super::{open_source, read_document};
use crate::source::SettingsFileSource;
use crate::xml::{XmlDocument, XmlElement, XmlName};
use crate::{ConfigurationData, ParseContext, XmlConfigResult};

const SETTING: &str = "Setting";
const VALUE: &str = "Value";
const NAME_ATTRIBUTE: &str = "Name";
const PROFILE_ATTRIBUTE: &str = "Profile";

/// Loads a settings file.
///
/// Every `Setting` element anywhere in the document contributes one entry per
/// `Value` child, keyed `Name:Profile`. `Setting` and `Value` are matched in the
/// namespace of the root element, whatever URI the producing tool used.
#[derive(Debug)]
pub struct SettingsFileProvider<'a> {
    source: &'a SettingsFileSource,
    data: Option<ConfigurationData>,
}

impl<'a> SettingsFileProvider<'a> {
    pub(crate) const fn new(source: &'a SettingsFileSource) -> Self {
        Self { source, data: None }
    }

    /// Source this provider was built from.
    #[must_use]
    pub const fn source(&self) -> &'a SettingsFileSource {
        self.source
    }

    /// Extract the profile values from an already parsed settings document.
    ///
    /// A `Setting` without `Name` is skipped, as is a `Value` without
    /// `Profile`; neither is an error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::XmlConfigError::DuplicateKey`] when two values resolve
    /// to the same `Name:Profile` key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ortho_config_xml::SettingsFileProvider;
    /// use ortho_config_xml::xml::parse_str;
    ///
    /// let doc = parse_str(r#"<SettingsFile xmlns="urn:s"><Setting Name="Foo"><Value Profile="(Default)">Joe</Value></Setting></SettingsFile>"#)?;
    /// let data = SettingsFileProvider::parse(&doc)?;
    /// assert_eq!(data.get("Foo:(Default)"), Some("Joe"));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse(document: &XmlDocument) -> XmlConfigResult<ConfigurationData> {
        let namespace = document.root.namespace();
        let setting_name = XmlName::qualified(namespace, SETTING);
        let value_name = XmlName::qualified(namespace, VALUE);

        let mut context = ParseContext::new();
        let mut results = ConfigurationData::new();
        let settings = std::iter::once(&document.root)
            .chain(document.root.descendants())
            .filter(|element| *element.name() == setting_name);
        for setting in settings {
            let Some(name) = setting.attribute(NAME_ATTRIBUTE) else {
                trace!("skipping Setting without a Name attribute");
                continue;
            };
            let values: Vec<&XmlElement> = setting.children_named(&value_name).collect();
            context.with_segment(name, |inner| -> XmlConfigResult<()> {
                for value in values {
                    let Some(profile) = value.attribute(PROFILE_ATTRIBUTE) else {
                        trace!(setting = name, "skipping Value without a Profile attribute");
                        continue;
                    };
                    results.insert(inner.compose_key(profile), value.text())?;
                }
                Ok(())
            })?;
        }
        Ok(results)
    }

    /// Read a settings document from `reader`, replacing any previously
    /// loaded data.
    ///
    /// # Errors
    ///
    /// Returns [`crate::XmlConfigError::MalformedXml`] when the stream is not
    /// well-formed, or [`crate::XmlConfigError::DuplicateKey`] as described
    /// for [`parse`](Self::parse).
    pub fn load<R: Read>(&mut self, reader: R) -> XmlConfigResult<&ConfigurationData> {
        let document = read_document(reader, self.source.path())?;
        let data = Self::parse(&document)?;
        debug!(
            path = %self.source.path(),
            entries = data.len(),
            "loaded XML settings file"
        );
        Ok(&*self.data.insert(data))
    }

    /// Open the source file and [`load`](Self::load) it. A missing optional
    /// file loads as an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns [`crate::XmlConfigError::NotFound`] for a missing required
    /// file, [`crate::XmlConfigError::File`] for other I/O failures, and any
    /// error from [`load`](Self::load).
    pub fn load_file(&mut self) -> XmlConfigResult<&ConfigurationData> {
        match open_source(self.source.path(), self.source.optional())? {
            Some(file) => self.load(file),
            None => Ok(&*self.data.insert(ConfigurationData::new())),
        }
    }

    /// Loaded data, or `None` before the first successful load.
    #[must_use]
    pub fn data(&self) -> Option<&ConfigurationData> {
        self.data.as_ref()
    }

    /// Consume the provider, yielding its loaded data.
    #[must_use]
    pub fn into_data(self) -> Option<ConfigurationData> {
        self.data
    }
}
