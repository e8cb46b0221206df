use crate::{
    errors::{FileOperation, IoError},
    fsops,
};
use colored::Colorize;
use std::{fs, path::Path};
use walkdir::WalkDir;

pub const BLOCKS_DIR: &str = "blocks";

const SCRIPT_EXTENSION: &str = "js";
const INSTRUMENTATION_MARKER: &str = "moveInstrumentation";

/// Deletes the `_<name>.json` descriptor from every immediate subdirectory of
/// the blocks root that owns one.
///
/// Plain files directly under the blocks root are ignored, and the whole step
/// is skipped when the blocks root itself is absent.
///
/// # Errors
///
/// Returns an [`IoError`] if the blocks root cannot be listed or a descriptor
/// cannot be removed.
pub fn delete_block_descriptors(root: &Path) -> Result<(), IoError> {
    let blocks_dir = root.join(BLOCKS_DIR);

    if !blocks_dir.exists() {
        log::debug!("no blocks directory at: {}", blocks_dir.display());
        return Ok(());
    }

    let entries = fs::read_dir(&blocks_dir)
        .map_err(|error| IoError::new(FileOperation::Read, blocks_dir.clone(), error))?;

    for entry in entries {
        let entry =
            entry.map_err(|error| IoError::new(FileOperation::Read, blocks_dir.clone(), error))?;

        let block_path = entry.path();
        if !block_path.is_dir() {
            continue;
        }

        let name = entry.file_name();
        let descriptor = block_path.join(format!("_{}.json", name.to_string_lossy()));

        fsops::delete_file(&descriptor)?;
    }

    Ok(())
}

/// Strips authoring-only instrumentation hooks from every script in the
/// blocks tree.
///
/// Walks the blocks root recursively; every line of every script file that
/// contains the instrumentation marker is dropped. A script is rewritten only
/// when at least one line was dropped, so files without hooks stay
/// byte-identical (and keep their timestamps). Skipped entirely when the
/// blocks root is absent.
///
/// # Errors
///
/// Returns an [`IoError`] if the walk fails or a script cannot be read or
/// rewritten.
pub fn strip_instrumentation(root: &Path) -> Result<(), IoError> {
    let blocks_dir = root.join(BLOCKS_DIR);

    if !blocks_dir.exists() {
        log::debug!("no blocks directory at: {}", blocks_dir.display());
        return Ok(());
    }

    for entry in WalkDir::new(&blocks_dir) {
        let entry = match entry {
            Ok(e) => e,
            Err(error) => {
                let path = error.path().unwrap_or_else(|| Path::new("")).to_path_buf();

                return Err(IoError::new(FileOperation::Walk, path, error.into()));
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();

        let is_script = path
            .extension()
            .map(|ext| ext == SCRIPT_EXTENSION)
            .unwrap_or(false);

        if is_script {
            strip_file(path)?;
        }
    }

    Ok(())
}

fn strip_file(path: &Path) -> Result<(), IoError> {
    let content = fs::read_to_string(path)
        .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

    // split on '\n' rather than lines() so the trailing-newline shape of the
    // file survives the rejoin
    let lines: Vec<&str> = content.split('\n').collect();
    let kept: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| !line.contains(INSTRUMENTATION_MARKER))
        .collect();

    if kept.len() == lines.len() {
        return Ok(());
    }

    fs::write(path, kept.join("\n"))
        .map_err(|error| IoError::new(FileOperation::Write, path.to_path_buf(), error))?;

    println!("{} {}", "strip".yellow(), path.display());

    Ok(())
}
