use crate::{
    blocks, fsops,
    manifest::{self, DA_SAMPLE, XWALK_SAMPLE},
    package,
    project::ProjectType,
};
use colored::Colorize;
use std::path::Path;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SetupError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] crate::errors::IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Package(#[from] package::PackageError),
}

const MODELS_DIR: &str = "models";

// Root-level component manifests consumed by the authoring tooling only.
const AUTHORING_ARTIFACTS: [&str; 4] = [
    "paths.json",
    "component-filters.json",
    "component-models.json",
    "component-definition.json",
];

/// Tailors a freshly cloned template checkout at `root` to the given project
/// type.
///
/// Selects the flavor's manifest sample, removes authoring-only content for
/// the non-authoring flavors, retires the tool's own vendored artifact when
/// one is supplied, and prints a completion summary. Every step tolerates
/// absent paths, so a run over a partially set-up checkout is harmless.
///
/// # Errors
///
/// Returns a [`SetupError`] if:
///
/// - A file or directory slated for removal cannot be deleted.
/// - A manifest sample cannot be copied over the active manifest.
/// - The package metadata document cannot be read, parsed, or rewritten.
pub fn initialize(
    root: &Path,
    project_type: ProjectType,
    artifact: Option<&Path>,
) -> Result<(), SetupError> {
    match project_type {
        ProjectType::Da => {
            manifest::replace_manifest(root, DA_SAMPLE)?;
            cleanup_authoring_content(root)?;
        }
        ProjectType::Xwalk => {
            manifest::replace_manifest(root, XWALK_SAMPLE)?;
            fsops::delete_file(&root.join(DA_SAMPLE))?;
        }
        ProjectType::Doc => {
            fsops::delete_file(&root.join(DA_SAMPLE))?;
            cleanup_authoring_content(root)?;
        }
    }

    // retire the vendored copy of this tool
    if let Some(artifact) = artifact {
        fsops::delete_file(artifact)?;
    }

    println!(
        "{} setup complete for '{}' project type",
        "done".green().bold(),
        project_type
    );

    Ok(())
}

/// Variant-neutral teardown of authoring-only content, applied to the `doc`
/// and `da` flavors.
///
/// In order: the schema-model tree, per-block JSON descriptors,
/// instrumentation lines in block scripts, the root-level component
/// manifests, the leftover xwalk manifest sample, and the `build:json`
/// entries of the package script table. Every step tolerates absent paths,
/// so running it twice leaves the same end state as running it once.
///
/// # Errors
///
/// Returns a [`SetupError`] if any removal or the package metadata rewrite
/// fails.
pub fn cleanup_authoring_content(root: &Path) -> Result<(), SetupError> {
    fsops::delete_dir(&root.join(MODELS_DIR))?;

    blocks::delete_block_descriptors(root)?;
    blocks::strip_instrumentation(root)?;

    for artifact in AUTHORING_ARTIFACTS {
        fsops::delete_file(&root.join(artifact))?;
    }

    fsops::delete_file(&root.join(XWALK_SAMPLE))?;

    package::prune_build_scripts(root)?;

    Ok(())
}
