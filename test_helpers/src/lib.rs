//! Test helpers shared across crates.
//!
//! This crate provides `figment::Jail` wrappers and builders for XML fixture
//! documents.

pub mod figment;
pub mod settings;
