//! XML configuration sources for Figment.
//!
//! Two document shapes are supported:
//!
//! - generic configuration files, whose top-level elements are interpreted by
//!   caller-supplied [`ElementParser`] strategies; and
//! - settings files, whose `Setting`/`Value` elements carry per-profile values
//!   flattened to `Name:Profile` keys.
//!
//! Both produce a flat, case-insensitive [`ConfigurationData`] which is
//! nested on [`KEY_DELIMITER`] when merged into a [`figment::Figment`].
//!
//! ```rust
//! use ortho_config_xml::SettingsFileProvider;
//! use ortho_config_xml::xml::parse_str;
//!
//! let doc = parse_str(concat!(
//!     r#"<SettingsFile xmlns="http://schemas.microsoft.com/VisualStudio/2004/01/settings">"#,
//!     r#"<Settings><Setting Name="Bob" Type="System.String" Scope="User">"#,
//!     r#"<Value Profile="(Default)">John</Value>"#,
//!     r#"<Value Profile="AnotherProfile">Johanna</Value>"#,
//!     r#"</Setting></Settings></SettingsFile>"#,
//! ))?;
//! let data = SettingsFileProvider::parse(&doc)?;
//! assert_eq!(data.get("bob:anotherprofile"), Some("Johanna"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod builder;
mod data;
mod error;
mod helpers;
mod key;
pub mod parser;
pub mod provider;
mod result_ext;
pub mod source;
pub mod xml;

pub use builder::XmlFigmentExt;
pub use data::{ConfigurationData, DEFAULT_PROFILE, SECTION_VALUE_KEY};
pub use error::XmlConfigError;
pub use key::{KEY_DELIMITER, ParseContext, compose_key};
pub use parser::{AttributeSectionParser, ElementParser};
pub use provider::{ConfigFileProvider, SettingsFileProvider};
pub use result_ext::{IntoFigmentError, XmlConfigFigmentExt};
pub use source::{ConfigFileSource, SettingsFileSource};

/// Result type used throughout the crate.
///
/// Errors are shared so that a single failure can be reported both to the
/// caller and to Figment without cloning its source.
pub type XmlConfigResult<T> = std::result::Result<T, std::sync::Arc<XmlConfigError>>;
