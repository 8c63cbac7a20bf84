//! Error types for patchbump modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from parsing or bumping a version string.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Version line has no quoted version string: {line:?}")]
    MissingQuotedVersion { line: String },

    #[error("Invalid component '{component}' in version '{version}'")]
    InvalidComponent { version: String, component: String },
}

/// Errors from reading, updating or writing the manifest file.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Manifest {} has {line_count} line(s); expected the version declaration on line 3",
        path.display()
    )]
    MissingVersionLine { path: PathBuf, line_count: usize },

    #[error("Failed to write manifest {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Bad version in manifest {}: {source}", path.display())]
    Version {
        path: PathBuf,
        #[source]
        source: VersionError,
    },
}
