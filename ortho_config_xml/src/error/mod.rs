//! Error types produced while registering and loading XML configuration.

mod constructors;
mod conversions;
mod types;

pub use types::XmlConfigError;

pub(crate) use constructors::{file_error, malformed_xml};

#[cfg(test)]
mod tests;
