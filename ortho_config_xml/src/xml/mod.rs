//! Owned XML element tree used by the configuration providers.
//!
//! Documents are read with `quick-xml`'s namespace-resolving reader and
//! materialised into [`XmlElement`]s so that parser strategies can inspect
//! attributes and children freely and recurse at their own pace.

mod error;
mod parser;
mod types;

pub use error::XmlParseError;
pub use parser::{parse_document, parse_str};
pub use types::{Descendants, XmlAttribute, XmlDocument, XmlElement, XmlName};

#[cfg(test)]
mod tests;
