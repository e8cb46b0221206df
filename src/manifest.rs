use crate::{errors::IoError, fsops};
use std::path::Path;

/// The active environment manifest consumed by the delivery platform.
pub const MANIFEST_FILE: &str = "fstab.yaml";
/// Pre-authored manifest candidate for the `da` flavor.
pub const DA_SAMPLE: &str = "fstab.yaml.da-sample";
/// Pre-authored manifest candidate for the `xwalk` flavor.
pub const XWALK_SAMPLE: &str = "fstab.yaml.xwalk-sample";

/// Promotes a variant sample to the active manifest, consuming the sample.
///
/// The copy and the delete are attempted in that order and each tolerates an
/// absent sample on its own, so a missing sample leaves the active manifest
/// untouched without short-circuiting the sequence.
///
/// # Errors
///
/// Returns an [`IoError`] if the copy or the delete itself fails.
pub fn replace_manifest(root: &Path, sample_name: &str) -> Result<(), IoError> {
    let sample = root.join(sample_name);

    fsops::copy_file(&sample, &root.join(MANIFEST_FILE))?;
    fsops::delete_file(&sample)?;

    Ok(())
}
