//! Fixture file output

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::target::Target;

/// Error while writing fixture files
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to write a fixture file
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Path of a target's fixture file inside `dir`.
pub fn fixture_path(dir: &Path, target: Target) -> PathBuf {
    dir.join(target.file_name())
}

/// Generate a target and overwrite its fixture file in `dir`.
///
/// The file holds the JSON text without a trailing newline.
pub fn write_fixture(dir: &Path, target: Target) -> Result<PathBuf, OutputError> {
    let path = fixture_path(dir, target);
    let json = target.generate().to_json();
    fs::write(&path, json).map_err(|source| OutputError::Write { path: path.clone(), source })?;
    Ok(path)
}
