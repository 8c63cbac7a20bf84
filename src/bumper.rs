//! Bump the patch version of a manifest in place.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ManifestError;
use crate::manifest::Manifest;
use crate::version::{Version, bump_patch};

/// Result of a successful bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub path: PathBuf,
    pub previous: Version,
    pub current: Version,
}

/// Increment the last version component in the manifest at `path`.
///
/// All parsing happens before anything is written; on error the file is
/// left as it was.
pub fn bump_manifest(path: &Path) -> Result<BumpOutcome, ManifestError> {
    let mut manifest = Manifest::read(path)?;

    let previous = manifest.version()?;
    let current = bump_patch(&previous);

    manifest.set_version(&current)?;
    manifest.write()?;

    info!(path = %path.display(), from = %previous, to = %current, "bumped version");

    Ok(BumpOutcome {
        path: path.to_path_buf(),
        previous,
        current,
    })
}
