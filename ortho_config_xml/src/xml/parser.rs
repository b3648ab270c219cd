//! Tree construction on top of `quick-xml`'s namespace-aware reader.

use std::io::BufRead;

use quick_xml::{
    events::{BytesStart, Event},
    name::ResolveResult,
    reader::NsReader,
};

use super::{XmlAttribute, XmlDocument, XmlElement, XmlName, XmlParseError};

/// Parse a complete document from `input`.
///
/// The reader is consumed to the end so that trailing garbage after the root
/// element is reported rather than ignored.
///
/// # Errors
///
/// Returns an [`XmlParseError`] when the input is not a well-formed,
/// namespace-well-formed document with exactly one root element.
///
/// # Examples
///
/// ```
/// use ortho_config_xml::xml::parse_document;
///
/// let doc = parse_document(&b"<root><child key=\"a\"/></root>"[..])?;
/// assert_eq!(doc.root.local_name(), "root");
/// assert_eq!(doc.root.children()[0].attribute("key"), Some("a"));
/// # Ok::<(), ortho_config_xml::xml::XmlParseError>(())
/// ```
pub fn parse_document<R: BufRead>(input: R) -> Result<XmlDocument, XmlParseError> {
    let mut reader = NsReader::from_reader(input);
    let mut buf = Vec::new();
    let mut open: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) => {
                let element = open_element(&reader, &start)?;
                if open.is_empty() && root.is_some() {
                    return Err(XmlParseError::MultipleRoots(element.name.to_string()));
                }
                open.push(element);
            }
            Event::Empty(start) => {
                let element = open_element(&reader, &start)?;
                close_element(element, &mut open, &mut root)?;
            }
            Event::End(end) => {
                let element = open.pop().ok_or_else(|| {
                    XmlParseError::UnmatchedEnd(String::from_utf8_lossy(end.name().as_ref()).into_owned())
                })?;
                close_element(element, &mut open, &mut root)?;
            }
            Event::Text(text) => append_text(&mut open, &text.unescape()?)?,
            Event::CData(cdata) => append_text(&mut open, std::str::from_utf8(&cdata)?)?,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(unclosed) = open.last() {
        return Err(XmlParseError::Unclosed(unclosed.name.to_string()));
    }
    root.map(|element| XmlDocument { root: element })
        .ok_or(XmlParseError::MissingRoot)
}

/// Parse a document held in memory.
///
/// # Errors
///
/// See [`parse_document`].
pub fn parse_str(text: &str) -> Result<XmlDocument, XmlParseError> {
    parse_document(text.as_bytes())
}

fn namespace_of(resolved: ResolveResult<'_>) -> Result<Option<String>, XmlParseError> {
    match resolved {
        ResolveResult::Bound(ns) => Ok(Some(std::str::from_utf8(ns.as_ref())?.to_owned())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(XmlParseError::UnknownPrefix(
            String::from_utf8_lossy(&prefix).into_owned(),
        )),
    }
}

fn open_element<R>(reader: &NsReader<R>, start: &BytesStart<'_>) -> Result<XmlElement, XmlParseError> {
    let (resolved, local) = reader.resolve_element(start.name());
    let name = XmlName::qualified(
        namespace_of(resolved)?.as_deref(),
        std::str::from_utf8(local.as_ref())?,
    );

    let mut attributes = Vec::new();
    for entry in start.attributes() {
        let attr = entry?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let (attr_ns, attr_local) = reader.resolve_attribute(attr.key);
        attributes.push(XmlAttribute {
            name: XmlName::qualified(
                namespace_of(attr_ns)?.as_deref(),
                std::str::from_utf8(attr_local.as_ref())?,
            ),
            value: attr.unescape_value()?.into_owned(),
        });
    }

    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
        text: String::new(),
    })
}

fn close_element(
    element: XmlElement,
    open: &mut [XmlElement],
    root: &mut Option<XmlElement>,
) -> Result<(), XmlParseError> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(XmlParseError::MultipleRoots(element.name.to_string()));
    }
    *root = Some(element);
    Ok(())
}

fn append_text(open: &mut [XmlElement], text: &str) -> Result<(), XmlParseError> {
    match open.last_mut() {
        Some(parent) => {
            parent.text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(XmlParseError::TextOutsideRoot),
    }
}
