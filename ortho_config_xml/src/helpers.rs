//! Filesystem helpers shared by sources and providers.

use camino::Utf8Path;
use cap_std::{
    ambient_authority,
    fs_utf8::{Dir, File},
};

/// Return the parent directory of `path`, falling back to `"."` when the path
/// has no parent or the parent is empty.
fn parent_or_dot(path: &Utf8Path) -> &Utf8Path {
    path.parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."))
}

/// Open the parent directory of `path` and return it with the file name.
fn open_parent_dir(path: &Utf8Path) -> std::io::Result<(Dir, &str)> {
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::other("cannot determine file name for configuration file path")
    })?;
    let dir = Dir::open_ambient_dir(parent_or_dot(path), ambient_authority())?;
    Ok((dir, file_name))
}

/// Open `path` for reading through a `cap-std` handle on its parent directory.
///
/// # Errors
///
/// Returns an [`std::io::Error`] if the file name cannot be determined, the
/// parent directory cannot be opened, or the file cannot be opened. A missing
/// directory or file reports [`std::io::ErrorKind::NotFound`].
pub(crate) fn open_config_file(path: &Utf8Path) -> std::io::Result<File> {
    let (dir, file_name) = open_parent_dir(path)?;
    dir.open(file_name)
}

/// `true` when `path` names an existing regular file reachable through the
/// same directory handle [`open_config_file`] uses.
pub(crate) fn file_exists(path: &Utf8Path) -> bool {
    open_parent_dir(path)
        .and_then(|(dir, file_name)| dir.metadata(file_name))
        .is_ok_and(|metadata| metadata.is_file())
}

#[cfg(test)]
mod tests {
    use anyhow::{Result, anyhow, ensure};
    use camino::Utf8Path;
    use rstest::rstest;

    use super::{file_exists, open_config_file, parent_or_dot};

    #[rstest]
    #[case("settings.xml", ".")]
    #[case("conf/settings.xml", "conf")]
    #[case("/etc/app/settings.xml", "/etc/app")]
    fn parent_defaults_to_current_directory(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(parent_or_dot(Utf8Path::new(path)), Utf8Path::new(expected));
    }

    #[rstest]
    fn existence_check_agrees_with_open() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let root = Utf8Path::from_path(dir.path()).ok_or_else(|| anyhow!("non-UTF-8 temp dir"))?;
        let file = root.join("app.xml");
        std::fs::write(&file, "<c/>")?;

        ensure!(file_exists(&file));
        ensure!(open_config_file(&file).is_ok());

        let missing = root.join("missing.xml");
        ensure!(!file_exists(&missing));
        ensure!(open_config_file(&missing).is_err());

        ensure!(!file_exists(root), "directories are not configuration files");
        ensure!(!file_exists(&root.join("absent/app.xml")));
        Ok(())
    }
}
