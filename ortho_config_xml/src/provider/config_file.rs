//! Provider for generic configuration files interpreted by element parsers.

use std::io::Read;
use std::sync::Arc;

use tracing::{debug, trace};

use super::{open_source, read_document};
use crate::parser::{ElementParser, dispatch_element};
use crate::source::ConfigFileSource;
use crate::xml::XmlDocument;
use crate::{ConfigurationData, ParseContext, XmlConfigResult};

/// Loads a generic configuration file.
///
/// Only the direct children of the root element are offered to the source's
/// parsers; each is handled by the first parser that accepts it. Deeper
/// traversal is left to the parsers themselves.
#[derive(Debug)]
pub struct ConfigFileProvider<'a> {
    source: &'a ConfigFileSource,
    data: Option<ConfigurationData>,
}

impl<'a> ConfigFileProvider<'a> {
    pub(crate) const fn new(source: &'a ConfigFileSource) -> Self {
        Self { source, data: None }
    }

    /// Source this provider was built from.
    #[must_use]
    pub const fn source(&self) -> &'a ConfigFileSource {
        self.source
    }

    /// Interpret an already parsed document with `parsers`.
    ///
    /// Each top-level element starts with an empty [`ParseContext`].
    /// Elements no parser accepts are dropped.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by a parser, including duplicate
    /// key insertions.
    pub fn parse(
        parsers: &[Arc<dyn ElementParser>],
        document: &XmlDocument,
    ) -> XmlConfigResult<ConfigurationData> {
        let mut results = ConfigurationData::new();
        for element in document.root.children() {
            let mut context = ParseContext::new();
            if !dispatch_element(parsers, element, &mut context, &mut results)? {
                trace!(element = %element.name(), "no parser accepted element");
            }
        }
        Ok(results)
    }

    /// Read and interpret a document from `reader`, replacing any previously
    /// loaded data.
    ///
    /// # Errors
    ///
    /// Returns [`crate::XmlConfigError::MalformedXml`] when the stream is not
    /// well-formed, or the error raised by a parser.
    pub fn load<R: Read>(&mut self, reader: R) -> XmlConfigResult<&ConfigurationData> {
        let document = read_document(reader, self.source.path())?;
        let data = Self::parse(self.source.parsers(), &document)?;
        debug!(
            path = %self.source.path(),
            entries = data.len(),
            "loaded XML configuration file"
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
