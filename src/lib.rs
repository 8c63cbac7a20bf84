//! patchbump - A CLI tool that increments the patch version of a manifest.
//!
//! # Overview
//!
//! patchbump reads `Project.toml`, takes the quoted version on its third line,
//! increments the last dot-separated component and writes the file back with
//! every other line untouched.

pub mod bumper;
pub mod error;
pub mod manifest;
pub mod version;

// Re-export commonly used types
pub use bumper::{BumpOutcome, bump_manifest};
pub use error::{ManifestError, VersionError};
pub use manifest::{MANIFEST_FILE, Manifest};
pub use version::Version;
