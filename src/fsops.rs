use crate::errors::{FileOperation, IoError};
use colored::Colorize;
use std::{fs, path::Path};

/// Recursively removes a directory tree if it exists.
///
/// Absence is treated as already-satisfied: the call is a silent no-op and
/// still succeeds. One action line is printed when something was deleted.
///
/// # Errors
///
/// Returns an [`IoError`] if the tree exists but cannot be removed.
pub fn delete_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() {
        log::debug!("nothing to delete at: {}", path.display());
        return Ok(());
    }

    fs::remove_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::RemoveDir, path.to_path_buf(), error))?;

    println!("{} {}", "delete".red(), path.display());

    Ok(())
}

/// Removes a single file if it exists; a silent no-op otherwise.
///
/// # Errors
///
/// Returns an [`IoError`] if the file exists but cannot be removed.
pub fn delete_file(path: &Path) -> Result<(), IoError> {
    if !path.exists() {
        log::debug!("nothing to delete at: {}", path.display());
        return Ok(());
    }

    fs::remove_file(path)
        .map_err(|error| IoError::new(FileOperation::Remove, path.to_path_buf(), error))?;

    println!("{} {}", "delete".red(), path.display());

    Ok(())
}

/// Copies `source` over `target` (creating or overwriting it) if `source`
/// exists; a silent no-op when it does not.
///
/// # Errors
///
/// Returns an [`IoError`] if the copy itself fails.
pub fn copy_file(source: &Path, target: &Path) -> Result<(), IoError> {
    if !source.exists() {
        log::debug!("nothing to copy at: {}", source.display());
        return Ok(());
    }

    fs::copy(source, target)
        .map_err(|error| IoError::new(FileOperation::Copy, source.to_path_buf(), error))?;

    println!(
        "{} {} -> {}",
        "copy".green(),
        source.display(),
        target.display()
    );

    Ok(())
}
