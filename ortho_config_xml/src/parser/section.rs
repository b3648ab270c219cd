//! Stock strategy mapping nested, attribute-keyed sections to flat keys.

use tracing::trace;

use super::ElementParser;
use crate::xml::XmlElement;
use crate::{ConfigurationData, ParseContext, XmlConfigResult};

/// Interprets `<section name="db" host="localhost"><section name="pool" size="4"/></section>`
/// as `db:host=localhost` and `db:pool:size=4`.
///
/// Elements whose local name matches are accepted regardless of namespace.
/// The key attribute (default `name`) becomes a path segment; every other
/// unqualified attribute becomes an entry beneath it, and non-blank text
/// becomes the value of the section key itself (published to Figment as
/// [`SECTION_VALUE_KEY`](crate::SECTION_VALUE_KEY) when the section also has
/// entries). Nested elements with the same
/// local name are processed recursively. Elements lacking the key attribute
/// contribute nothing.
#[derive(Debug, Clone)]
pub struct AttributeSectionParser {
    element: String,
    key_attribute: String,
}

impl AttributeSectionParser {
    /// Strategy for elements named `element`, keyed by their `name` attribute.
    #[must_use]
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            key_attribute: String::from("name"),
        }
    }

    /// Use `attribute` instead of `name` as the section key.
    #[must_use]
    pub fn key_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.key_attribute = attribute.into();
        self
    }

    fn parse_section(
        &self,
        element: &XmlElement,
        context: &mut ParseContext,
        results: &mut ConfigurationData,
    ) -> XmlConfigResult<()> {
        let Some(section) = element.attribute(&self.key_attribute) else {
            trace!(
                element = %element.name(),
                attribute = %self.key_attribute,
                "skipping section without key attribute"
            );
            return Ok(());
        };
        let section_key = context.compose_key(section);
        let text = element.text().trim();
        if !text.is_empty() {
            results.insert(section_key, text)?;
        }
        context.with_segment(section, |inner| -> XmlConfigResult<()> {
            for attr in element.attributes() {
                if attr.name.namespace().is_some() || attr.name.local_name() == self.key_attribute {
                    continue;
                }
                results.insert(inner.compose_key(attr.name.local_name()), attr.value.as_str())?;
            }
            for child in element.children() {
                if self.can_parse_element(child) {
                    self.parse_section(child, inner, results)?;
                }
            }
            Ok(())
        })
    }
}

impl ElementParser for AttributeSectionParser {
    fn can_parse_element(&self, element: &XmlElement) -> bool {
        element.local_name() == self.element
    }

    fn parse_element(
        &self,
        element: &XmlElement,
        context: &mut ParseContext,
        results: &mut ConfigurationData,
    ) -> XmlConfigResult<()> {
        self.parse_section(element, context, results)
    }
}
