//! Element tree types.

use std::fmt;

/// Namespace-resolved element or attribute name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct XmlName {
    namespace: Option<String>,
    local: String,
}

impl XmlName {
    /// Name without a namespace.
    #[must_use]
    pub fn local(local: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local: local.into(),
        }
    }

    /// Name qualified by `namespace`. An empty URI means "no namespace".
    #[must_use]
    pub fn qualified(namespace: Option<&str>, local: impl Into<String>) -> Self {
        Self {
            namespace: namespace.filter(|ns| !ns.is_empty()).map(str::to_owned),
            local: local.into(),
        }
    }

    /// Namespace URI, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Local part of the name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local
    }
}

impl fmt::Display for XmlName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{ns}}}{}", self.local),
            None => f.write_str(&self.local),
        }
    }
}

/// Attribute with its resolved name and unescaped value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    /// Resolved attribute name. Unprefixed attributes have no namespace.
    pub name: XmlName,
    /// Unescaped attribute value.
    pub value: String,
}

/// Element with attributes, child elements and direct character data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub(crate) name: XmlName,
    pub(crate) attributes: Vec<XmlAttribute>,
    pub(crate) children: Vec<XmlElement>,
    pub(crate) text: String,
}

impl XmlElement {
    /// Creates an empty element, mostly useful for tests of parser strategies.
    #[must_use]
    pub const fn new(name: XmlName) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// Adds an unqualified attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(XmlAttribute {
            name: XmlName::local(name),
            value: value.into(),
        });
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends character data.
    #[must_use]
    pub fn with_text(mut self, text: impl AsRef<str>) -> Self {
        self.text.push_str(text.as_ref());
        self
    }

    /// Resolved element name.
    #[must_use]
    pub const fn name(&self) -> &XmlName {
        &self.name
    }

    /// Local part of the element name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.name.local_name()
    }

    /// Namespace URI of the element, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.name.namespace()
    }

    /// Value of the unqualified attribute `local`.
    #[must_use]
    pub fn attribute(&self, local: &str) -> Option<&str> {
        self.attribute_named(&XmlName::local(local))
    }

    /// Value of the attribute matching `name` exactly.
    #[must_use]
    pub fn attribute_named(&self, name: &XmlName) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == *name)
            .map(|attr| attr.value.as_str())
    }

    /// All attributes in document order, excluding namespace declarations.
    #[must_use]
    pub fn attributes(&self) -> &[XmlAttribute] {
        &self.attributes
    }

    /// Direct child elements in document order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Direct children whose resolved name equals `name`.
    pub fn children_named<'a>(&'a self, name: &'a XmlName) -> impl Iterator<Item = &'a Self> {
        self.children.iter().filter(move |child| child.name == *name)
    }

    /// All elements below this one in depth-first document order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Character data directly inside this element, with text and CDATA
    /// sections concatenated in document order.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Iterator returned by [`XmlElement::descendants`].
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<&'a XmlElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}

/// Parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    /// The single top-level element.
    pub root: XmlElement,
}
