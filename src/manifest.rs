//! Line-preserving manifest reading and writing.
//!
//! The manifest is handled as raw lines rather than parsed TOML so that every
//! line other than the version declaration round-trips byte for byte.

use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ManifestError;
use crate::version::{Version, version_from_line};

/// Default manifest file name, looked up in the working directory.
pub const MANIFEST_FILE: &str = "Project.toml";

/// Zero-based index of the `version = "..."` line.
const VERSION_LINE_INDEX: usize = 2;

/// A manifest file held in memory as lines with their terminators.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    lines: Vec<String>,
}

impl Manifest {
    /// Read a manifest from disk.
    pub fn read(path: &Path) -> Result<Self, ManifestError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ManifestError::ReadFailed {
                path: path.to_path_buf(),
                source,
            })?;

        let manifest = Self::from_content(path, &content);
        debug!(path = %path.display(), lines = manifest.lines.len(), "read manifest");
        Ok(manifest)
    }

    /// Build a manifest from already-loaded content.
    pub fn from_content(path: &Path, content: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: split_lines(content),
        }
    }

    /// Lines including their original terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The raw version declaration line.
    pub fn version_line(&self) -> Result<&str, ManifestError> {
        self.lines
            .get(VERSION_LINE_INDEX)
            .map(String::as_str)
            .ok_or_else(|| ManifestError::MissingVersionLine {
                path: self.path.clone(),
                line_count: self.lines.len(),
            })
    }

    /// Parse the version held on the version line.
    pub fn version(&self) -> Result<Version, ManifestError> {
        let line = self.version_line()?;
        version_from_line(line).map_err(|source| ManifestError::Version {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the version line with `version = "<version>"\n`.
    pub fn set_version(&mut self, version: &Version) -> Result<(), ManifestError> {
        let line_count = self.lines.len();
        let line = self.lines.get_mut(VERSION_LINE_INDEX).ok_or_else(|| {
            ManifestError::MissingVersionLine {
                path: self.path.clone(),
                line_count,
            }
        })?;

        *line = format!("version = \"{}\"\n", version);
        Ok(())
    }

    /// Concatenate all lines back into file content.
    pub fn render(&self) -> String {
        self.lines.concat()
    }

    /// Write the manifest back to its path, through any symlink.
    ///
    /// A read-only manifest is refused before anything is written.
    pub fn write(&self) -> Result<(), ManifestError> {
        let write_err = |source: Error| ManifestError::WriteFailed {
            path: self.path.clone(),
            source,
        };

        let metadata = std::fs::metadata(&self.path).map_err(write_err)?;
        if metadata.permissions().readonly() {
            return Err(write_err(Error::new(
                ErrorKind::PermissionDenied,
                "manifest is read-only",
            )));
        }

        std::fs::write(&self.path, self.render()).map_err(write_err)?;

        debug!(path = %self.path.display(), "wrote manifest");
        Ok(())
    }
}

/// Split text into lines, keeping each terminator.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = content.as_bytes();

    for (i, &b) in bytes.iter().enumerate() {
        let ends_line = match b {
            b'\n' => true,
            b'\r' => bytes.get(i + 1) != Some(&b'\n'),
            _ => false,
        };
        if ends_line {
            lines.push(content[start..=i].to_string());
            start = i + 1;
        }
    }

    if start < content.len() {
        lines.push(content[start..].to_string());
    }

    lines
}
