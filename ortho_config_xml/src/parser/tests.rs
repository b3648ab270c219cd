//! Dispatch order and stock strategy behaviour.

use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;

use figment::value::Value;

use super::{AttributeSectionParser, ElementParser, dispatch_element};
use crate::xml::{XmlElement, XmlName, parse_str};
use crate::{ConfigurationData, ParseContext, SECTION_VALUE_KEY, XmlConfigResult};

/// Accepts elements named `accepts` and records every element it parses.
struct Recording {
    label: &'static str,
    accepts: &'static str,
    seen: Arc<Mutex<Vec<String>>>,
}

impl ElementParser for Recording {
    fn can_parse_element(&self, element: &XmlElement) -> bool {
        element.local_name() == self.accepts
    }

    fn parse_element(
        &self,
        element: &XmlElement,
        context: &mut ParseContext,
        results: &mut ConfigurationData,
    ) -> XmlConfigResult<()> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(format!("{}:{}", self.label, element.local_name()));
        }
        results.insert(context.compose_key(element.local_name()), self.label)
    }
}

fn recording(
    label: &'static str,
    accepts: &'static str,
    seen: &Arc<Mutex<Vec<String>>>,
) -> Arc<dyn ElementParser> {
    Arc::new(Recording {
        label,
        accepts,
        seen: Arc::clone(seen),
    })
}

fn to_anyhow<T>(result: XmlConfigResult<T>) -> Result<T> {
    result.map_err(|err| anyhow!(err.to_string()))
}

#[rstest]
fn first_accepting_parser_wins() -> Result<()> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let parsers = [recording("first", "item", &seen), recording("second", "item", &seen)];
    let element = XmlElement::new(XmlName::local("item"));
    let mut results = ConfigurationData::new();

    let handled = to_anyhow(dispatch_element(
        &parsers,
        &element,
        &mut ParseContext::new(),
        &mut results,
    ))?;

    ensure!(handled);
    ensure!(results.get("item") == Some("first"));
    let log = seen.lock().map_err(|_| anyhow!("poisoned log"))?.clone();
    ensure!(log == ["first:item"], "second parser must not run: {log:?}");
    Ok(())
}

#[rstest]
fn unmatched_elements_are_reported_without_error() -> Result<()> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let parsers = [recording("only", "item", &seen)];
    let element = XmlElement::new(XmlName::local("other"));
    let mut results = ConfigurationData::new();
    let handled = to_anyhow(dispatch_element(
        &parsers,
        &element,
        &mut ParseContext::new(),
        &mut results,
    ))?;
    ensure!(!handled);
    ensure!(results.is_empty());
    Ok(())
}

#[rstest]
fn section_parser_flattens_nested_sections() -> Result<()> {
    let doc = parse_str(
        r#"<config>
             <section name="db" host="localhost">
               <section name="pool" size="4"/>
               <ignored name="x" value="y"/>
             </section>
           </config>"#,
    )
    .map_err(|err| anyhow!(err.to_string()))?;
    let parser = AttributeSectionParser::new("section");
    let db = doc
        .root
        .children()
        .first()
        .ok_or_else(|| anyhow!("expected a section"))?;
    let mut context = ParseContext::new();
    let mut results = ConfigurationData::new();
    to_anyhow(parser.parse_element(db, &mut context, &mut results))?;

    let entries: Vec<(&str, &str)> = results.iter().collect();
    ensure!(
        entries == [("db:host", "localhost"), ("db:pool:size", "4")],
        "unexpected entries: {entries:?}"
    );
    ensure!(context.is_empty(), "context must be restored");
    Ok(())
}

#[rstest]
fn section_parser_uses_text_and_custom_key_attribute() -> Result<()> {
    let element = XmlElement::new(XmlName::local("entry"))
        .with_attribute("key", "Greeting")
        .with_text("  hello  ");
    let parser = AttributeSectionParser::new("entry").key_attribute("key");
    let mut context = ParseContext::new();
    context.push("App");
    let mut results = ConfigurationData::new();
    to_anyhow(parser.parse_element(&element, &mut context, &mut results))?;
    ensure!(results.get("App:Greeting") == Some("hello"));
    ensure!(context.segments() == ["App"]);
    Ok(())
}

#[rstest]
fn section_parser_skips_elements_without_key() -> Result<()> {
    let element = XmlElement::new(XmlName::local("section")).with_attribute("host", "h");
    let mut results = ConfigurationData::new();
    to_anyhow(AttributeSectionParser::new("section").parse_element(
        &element,
        &mut ParseContext::new(),
        &mut results,
    ))?;
    ensure!(results.is_empty());
    Ok(())
}

#[rstest]
fn section_parser_propagates_duplicate_keys() {
    let element = XmlElement::new(XmlName::local("section"))
        .with_attribute("name", "db")
        .with_attribute("host", "collides")
        .with_child(
            XmlElement::new(XmlName::local("section"))
                .with_attribute("name", "host")
                .with_text("again"),
        );
    let mut results = ConfigurationData::new();
    let outcome = AttributeSectionParser::new("section").parse_element(
        &element,
        &mut ParseContext::new(),
        &mut results,
    );
    assert!(outcome.is_err(), "db:host written twice must fail");
}

#[rstest]
fn section_text_coexists_with_attributes_and_children() -> Result<()> {
    let doc = parse_str(
        r#"<config>
             <section name="db" host="x">
               primary
               <section name="pool" size="4">inner</section>
             </section>
           </config>"#,
    )
    .map_err(|err| anyhow!(err.to_string()))?;
    let db = doc
        .root
        .children()
        .first()
        .ok_or_else(|| anyhow!("expected a section"))?;
    let mut results = ConfigurationData::new();
    to_anyhow(AttributeSectionParser::new("section").parse_element(
        db,
        &mut ParseContext::new(),
        &mut results,
    ))?;

    let entries: Vec<(&str, &str)> = results.iter().collect();
    ensure!(
        entries
            == [
                ("db", "primary"),
                ("db:host", "x"),
                ("db:pool", "inner"),
                ("db:pool:size", "4"),
            ],
        "unexpected entries: {entries:?}"
    );

    let dict = results.to_dict();
    let Some(Value::Dict(_, section)) = dict.get("db") else {
        return Err(anyhow!("expected db section, got {dict:?}"));
    };
    ensure!(section.get(SECTION_VALUE_KEY).and_then(Value::as_str) == Some("primary"));
    ensure!(section.get("host").and_then(Value::as_str) == Some("x"));
    let Some(Value::Dict(_, pool)) = section.get("pool") else {
        return Err(anyhow!("expected pool section, got {section:?}"));
    };
    ensure!(pool.get(SECTION_VALUE_KEY).and_then(Value::as_str) == Some("inner"));
    ensure!(pool.get("size").and_then(Value::as_str) == Some("4"));
    Ok(())
}
