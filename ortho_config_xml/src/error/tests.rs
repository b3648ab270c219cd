//! Unit tests for error construction and Figment interop.

use std::sync::Arc;

use camino::Utf8Path;
use rstest::rstest;

use super::{XmlConfigError, file_error, malformed_xml};
use crate::result_ext::IntoFigmentError;
use crate::xml::XmlParseError;

#[rstest]
fn not_found_is_recognised_from_either_source() {
    assert!(XmlConfigError::not_found("a.xml").is_not_found());
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    assert!(file_error(Utf8Path::new("a.xml"), io).is_not_found());
    let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no");
    assert!(!file_error(Utf8Path::new("a.xml"), denied).is_not_found());
}

#[rstest]
fn messages_name_the_offending_path_or_key() {
    let err = malformed_xml(Utf8Path::new("conf/app.xml"), XmlParseError::MissingRoot);
    assert_eq!(
        err.to_string(),
        "Malformed XML in 'conf/app.xml': document has no root element"
    );
    let dup = XmlConfigError::duplicate_key("Bob:(Default)");
    assert_eq!(
        dup.to_string(),
        "An entry with the key 'Bob:(Default)' has already been added"
    );
}

#[rstest]
fn shared_errors_keep_their_message() {
    let err = Arc::new(XmlConfigError::invalid_argument("path", "must not be empty"));
    let _keep_alive = Arc::clone(&err);
    let converted = err.into_figment();
    assert!(converted.to_string().contains("must not be empty"));
}

#[rstest]
fn owned_errors_convert_with_their_message() {
    let converted = Arc::new(XmlConfigError::duplicate_key("Bob:(Default)")).into_figment();
    assert_eq!(
        converted.to_string(),
        "An entry with the key 'Bob:(Default)' has already been added"
    );
}
