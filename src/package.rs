use crate::errors::{FileFormat, FileOperation, IoError, ParseError};
use colored::Colorize;
use indexmap::IndexMap;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;

pub const PACKAGE_MANIFEST: &str = "package.json";

const BUILD_JSON_PREFIX: &str = "build:json";
const SCRIPTS_KEY: &str = "scripts";

#[derive(Debug, Error, Diagnostic)]
pub enum PackageError {
    #[error("I/O error within package metadata domain")]
    #[diagnostic(code(fitout::package::io))]
    Io(#[from] IoError),

    #[error("invalid package metadata document")]
    #[diagnostic(code(fitout::package::parse))]
    Parse(#[from] ParseError),
}

/// The whole `package.json` document, top-level key order preserved.
#[derive(Debug, Deserialize, Serialize)]
pub struct PackageManifest(pub IndexMap<String, serde_json::Value>);
impl PackageManifest {
    /// Reads and parses the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`PackageError`] if the file cannot be read or is not valid
    /// JSON.
    pub fn from_file(path: &Path) -> Result<Self, PackageError> {
        let content = fs::read_to_string(path)
            .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

        let parsed = serde_json::from_str(&content)
            .map_err(|error| ParseError::new(FileFormat::Json, path.to_path_buf(), error))?;

        Ok(Self(parsed))
    }

    /// Drops every entry of the script table whose name starts with the
    /// `build:json` prefix, returning how many were removed. A document
    /// without a script table has nothing to remove.
    pub fn remove_build_scripts(&mut self) -> usize {
        let Some(serde_json::Value::Object(scripts)) = self.0.get_mut(SCRIPTS_KEY) else {
            return 0;
        };

        let before = scripts.len();
        scripts.retain(|key, _| !key.starts_with(BUILD_JSON_PREFIX));

        before - scripts.len()
    }

    /// Serializes the document as pretty-printed JSON (2-space indentation)
    /// with a trailing newline.
    pub fn to_pretty_string(&self) -> Result<String, serde_json::Error> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');

        Ok(text)
    }
}

/// Removes every `build:json` script from the package metadata document and
/// rewrites it in place, preserving all other fields and their order.
///
/// Skipped entirely when the document does not exist.
///
/// # Errors
///
/// Returns a [`PackageError`] if the document cannot be read, parsed, or
/// rewritten.
pub fn prune_build_scripts(root: &Path) -> Result<(), PackageError> {
    let path = root.join(PACKAGE_MANIFEST);

    if !path.exists() {
        log::debug!("no package metadata at: {}", path.display());
        return Ok(());
    }

    let mut manifest = PackageManifest::from_file(&path)?;

    let removed = manifest.remove_build_scripts();
    log::debug!("removed {} build:json scripts", removed);

    let text = manifest
        .to_pretty_string()
        .map_err(|error| ParseError::new(FileFormat::Json, path.clone(), error))?;

    fs::write(&path, text)
        .map_err(|error| IoError::new(FileOperation::Write, path.clone(), error))?;

    println!("{} {}", "rewrite".yellow(), path.display());

    Ok(())
}
