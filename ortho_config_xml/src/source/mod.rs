//! Immutable descriptions of XML configuration files.
//!
//! Sources validate their path when constructed and build the matching
//! provider on demand. Each source is also a [`figment::Provider`]: merging it
//! into a [`figment::Figment`] builds the provider, loads the file and hands
//! the nested mapping to Figment.

mod config_file;
mod settings_file;

use std::sync::Arc;

use camino::Utf8PathBuf;
use figment::value::{Dict, Map};
use figment::Profile;
use tracing::debug;

use crate::helpers::file_exists;
use crate::result_ext::XmlConfigFigmentExt;
use crate::{ConfigurationData, XmlConfigError, XmlConfigResult};

pub use config_file::ConfigFileSource;
pub use settings_file::SettingsFileSource;

/// Check the registration arguments shared by every source.
///
/// The path must be non-empty and, unless `optional`, must name an existing
/// file. No other I/O happens here.
fn validate_path(path: Utf8PathBuf, optional: bool) -> XmlConfigResult<Utf8PathBuf> {
    if path.as_str().is_empty() {
        return Err(Arc::new(XmlConfigError::invalid_argument(
            "path",
            "configuration file path must not be empty",
        )));
    }
    if !file_exists(&path) {
        if !optional {
            return Err(Arc::new(XmlConfigError::not_found(path)));
        }
        debug!(path = %path, "optional XML configuration file does not exist yet");
    }
    Ok(path)
}

/// Convert loaded data into the per-profile map Figment expects.
fn figment_data(
    data: XmlConfigResult<ConfigurationData>,
) -> Result<Map<Profile, Dict>, figment::Error> {
    let dict = data.into_figment_result()?.to_dict();
    Ok(Profile::Default.collect(dict))
}
