//! Pluggable interpretation of generic configuration elements.
//!
//! A generic configuration file is any XML document; what its top-level
//! elements mean is decided by an ordered list of [`ElementParser`]s supplied
//! by the caller. The first parser that accepts an element handles it and no
//! later parser sees it.

mod section;

use std::sync::Arc;

use crate::xml::XmlElement;
use crate::{ConfigurationData, ParseContext, XmlConfigResult};

pub use section::AttributeSectionParser;

/// Strategy that interprets one kind of element.
///
/// Implementations may recurse into the element's children themselves,
/// pushing extra segments onto `context` as they descend. Providers never
/// recurse on a strategy's behalf.
///
/// # Examples
///
/// ```
/// use ortho_config_xml::{ConfigurationData, ElementParser, ParseContext, XmlConfigResult};
/// use ortho_config_xml::xml::XmlElement;
///
/// struct AddParser;
///
/// impl ElementParser for AddParser {
///     fn can_parse_element(&self, element: &XmlElement) -> bool {
///         element.local_name() == "add"
///     }
///
///     fn parse_element(
///         &self,
///         element: &XmlElement,
///         context: &mut ParseContext,
///         results: &mut ConfigurationData,
///     ) -> XmlConfigResult<()> {
///         if let (Some(key), Some(value)) = (element.attribute("key"), element.attribute("value")) {
///             results.insert(context.compose_key(key), value)?;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait ElementParser: Send + Sync {
    /// Whether this strategy understands `element`.
    fn can_parse_element(&self, element: &XmlElement) -> bool;

    /// Interpret `element`, writing entries into `results`.
    ///
    /// # Errors
    ///
    /// Implementations return an error when `results` rejects an entry (for
    /// example a duplicate key) or when the element is unusable in a way the
    /// strategy considers fatal.
    fn parse_element(
        &self,
        element: &XmlElement,
        context: &mut ParseContext,
        results: &mut ConfigurationData,
    ) -> XmlConfigResult<()>;
}

/// Shared, ordered list of strategies registered on a source.
pub type ElementParsers = Arc<[Arc<dyn ElementParser>]>;

/// Offer `element` to `parsers` in order, letting the first acceptor parse it.
///
/// Returns `Ok(false)` when no parser accepted the element.
///
/// # Errors
///
/// Propagates the error returned by the accepting parser.
pub fn dispatch_element(
    parsers: &[Arc<dyn ElementParser>],
    element: &XmlElement,
    context: &mut ParseContext,
    results: &mut ConfigurationData,
) -> XmlConfigResult<bool> {
    let Some(parser) = parsers.iter().find(|parser| parser.can_parse_element(element)) else {
        return Ok(false);
    };
    parser.parse_element(element, context, results)?;
    Ok(true)
}

#[cfg(test)]
mod tests;
