//! Element tree construction tests.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;

use super::{XmlName, XmlParseError, parse_str};

fn parse(text: &str) -> Result<super::XmlDocument> {
    parse_str(text).map_err(|err| anyhow!("failed to parse fixture: {err}"))
}

#[rstest]
fn resolves_default_namespace_on_descendants() -> Result<()> {
    let doc = parse(
        r#"<SettingsFile xmlns="urn:example:settings"><Settings><Setting Name="a"/></Settings></SettingsFile>"#,
    )?;
    ensure!(doc.root.namespace() == Some("urn:example:settings"));
    let setting = doc
        .root
        .descendants()
        .find(|el| el.local_name() == "Setting")
        .ok_or_else(|| anyhow!("expected Setting descendant"))?;
    ensure!(setting.namespace() == Some("urn:example:settings"));
    ensure!(setting.attribute("Name") == Some("a"), "unprefixed attribute has no namespace");
    Ok(())
}

#[rstest]
fn prefixed_attributes_do_not_match_unqualified_lookups() -> Result<()> {
    let doc = parse(r#"<root xmlns:x="urn:x" x:Name="qualified" Name="plain"/>"#)?;
    ensure!(doc.root.attribute("Name") == Some("plain"));
    ensure!(
        doc.root
            .attribute_named(&XmlName::qualified(Some("urn:x"), "Name"))
            == Some("qualified")
    );
    ensure!(doc.root.attributes().len() == 2, "xmlns declarations are not attributes");
    Ok(())
}

#[rstest]
fn descendants_follow_document_order() -> Result<()> {
    let doc = parse("<r><a><b/><c/></a><d><e/></d></r>")?;
    let names: Vec<&str> = doc.root.descendants().map(super::XmlElement::local_name).collect();
    ensure!(names == ["a", "b", "c", "d", "e"], "unexpected order: {names:?}");
    Ok(())
}

#[rstest]
fn text_is_unescaped_and_merged_with_cdata() -> Result<()> {
    let doc = parse("<v>a &amp; b<![CDATA[ <raw> ]]></v>")?;
    ensure!(doc.root.text() == "a & b <raw> ", "got {:?}", doc.root.text());
    Ok(())
}

#[rstest]
fn declarations_and_comments_are_ignored() -> Result<()> {
    let doc = parse("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!-- note -->\n<root/>\n")?;
    ensure!(doc.root.local_name() == "root");
    ensure!(doc.root.children().is_empty());
    Ok(())
}

#[rstest]
#[case::empty("")]
#[case::whitespace("   \n")]
fn rejects_documents_without_root(#[case] text: &str) {
    assert!(matches!(parse_str(text), Err(XmlParseError::MissingRoot)));
}

#[rstest]
#[case::two_roots("<a/><b/>", "more than one root")]
#[case::stray_text("<a/>junk", "outside the root")]
fn rejects_malformed_documents(#[case] text: &str, #[case] expected: &str) -> Result<()> {
    let Err(err) = parse_str(text) else {
        return Err(anyhow!("expected '{text}' to be rejected"));
    };
    ensure!(
        err.to_string().contains(expected),
        "expected error to mention '{expected}', got: {err}"
    );
    Ok(())
}

#[rstest]
#[case::mismatched_end("<a><b></a></b>")]
#[case::unclosed("<a><b></b>")]
#[case::unknown_prefix("<p:a/>")]
#[case::bad_attribute("<a key=unquoted/>")]
fn rejects_ill_formed_markup(#[case] text: &str) {
    assert!(parse_str(text).is_err(), "expected '{text}' to be rejected");
}
