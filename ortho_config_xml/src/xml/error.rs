//! Well-formedness failures reported while building the element tree.

use thiserror::Error;

/// Reasons a document could not be turned into an element tree.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum XmlParseError {
    /// Syntax error reported by `quick-xml`.
    #[error(transparent)]
    Syntax(#[from] quick_xml::Error),

    /// An attribute could not be read.
    #[error(transparent)]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Names or character data were not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// A prefix was used without a matching `xmlns` declaration.
    #[error("undeclared namespace prefix '{0}'")]
    UnknownPrefix(String),

    /// The input contained no element at all.
    #[error("document has no root element")]
    MissingRoot,

    /// A second top-level element followed the root.
    #[error("document has more than one root element ('{0}')")]
    MultipleRoots(String),

    /// Character data appeared before or after the root element.
    #[error("unexpected text outside the root element")]
    TextOutsideRoot,

    /// An end tag appeared without a matching start tag.
    #[error("unexpected end tag '{0}'")]
    UnmatchedEnd(String),

    /// Input ended while an element was still open.
    #[error("element '{0}' is not closed")]
    Unclosed(String),
}
