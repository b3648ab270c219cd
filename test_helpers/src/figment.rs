//! Shared helpers for working with `figment::Jail` in tests.
//!
//! The jail gives each test a private working directory, so fixtures written
//! with [`create_file`] can be registered by relative path.

use std::cell::RefCell;

use anyhow::{Result, anyhow};
use camino::Utf8PathBuf;
use figment::Jail;

/// Runs `f` inside a [`figment::Jail`], returning the closure's output.
///
/// The jail is torn down once the closure completes, even when it fails.
///
/// # Errors
///
/// Returns an error if the jail cannot be initialised or the closure fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut Jail) -> Result<T>,
{
    let outcome: RefCell<Option<Result<T>>> = RefCell::new(None);
    Jail::try_with(|jail| {
        outcome.replace(Some(f(jail)));
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    outcome
        .into_inner()
        .unwrap_or_else(|| Err(anyhow!("jail closure did not produce a result")))
}

/// Writes `contents` to `name` inside the jail and returns the relative path.
///
/// # Errors
///
/// Returns an error if the file cannot be created.
pub fn create_file(jail: &Jail, name: &str, contents: &str) -> Result<Utf8PathBuf> {
    jail.create_file(name, contents)
        .map_err(|err| anyhow!("failed to create {name}: {err}"))?;
    Ok(Utf8PathBuf::from(name))
}
