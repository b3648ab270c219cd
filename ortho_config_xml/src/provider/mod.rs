//! Providers that turn an XML stream into a flat [`crate::ConfigurationData`].
//!
//! A provider is built from its source, starts out unloaded, and holds the
//! mapping produced by its single `load` call. The hosting Figment drives
//! that call through the source's [`figment::Provider`] implementation.

mod config_file;
mod settings_file;

use std::io::{BufReader, Read};

use camino::Utf8Path;
use cap_std::fs_utf8::File;
use tracing::debug;

use crate::error::{file_error, malformed_xml};
use crate::helpers::open_config_file;
use crate::xml::{XmlDocument, parse_document};
use crate::{XmlConfigError, XmlConfigResult};

pub use config_file::ConfigFileProvider;
pub use settings_file::SettingsFileProvider;

/// Parse `reader` to completion, attributing failures to `path`.
fn read_document<R: Read>(reader: R, path: &Utf8Path) -> XmlConfigResult<XmlDocument> {
    parse_document(BufReader::new(reader)).map_err(|err| malformed_xml(path, err))
}

/// Open the file behind a source.
///
/// Returns `Ok(None)` for a missing optional file.
fn open_source(path: &Utf8Path, optional: bool) -> XmlConfigResult<Option<File>> {
    match open_config_file(path) {
        Ok(file) => Ok(Some(file)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            if optional {
                debug!(path = %path, "optional XML configuration file is missing");
                Ok(None)
            } else {
                Err(std::sync::Arc::new(XmlConfigError::not_found(path)))
            }
        }
        Err(err) => Err(file_error(path, err)),
    }
}
