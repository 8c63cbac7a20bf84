//! Version values read from a manifest version line.

use std::fmt;
use std::str::FromStr;

use crate::error::VersionError;

/// A dot-separated list of non-negative integers, e.g. `1.2.3`.
///
/// Usually three components (major, minor, patch), but any non-zero count
/// is accepted. Components are kept as normalized decimal digit strings so
/// there is no width limit. No pre-release or build-metadata suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    components: Vec<String>,
}

impl Version {
    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub(crate) fn components_mut(&mut self) -> &mut [String] {
        &mut self.components
    }
}

/// Parse one component: ASCII digits with optional surrounding whitespace.
///
/// Leading zeros are dropped, so `007` reads as `7`.
fn parse_component(version: &str, part: &str) -> Result<String, VersionError> {
    let digits = part.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::InvalidComponent {
            version: version.to_string(),
            component: part.to_string(),
        });
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        Ok("0".to_string())
    } else {
        Ok(significant.to_string())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `str::split` always yields at least one item, so the list is never empty.
        let components = s
            .split('.')
            .map(|part| parse_component(s, part))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { components })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("."))
    }
}

/// Extract and parse the version from a line such as `version = "1.2.3"`.
///
/// The version is the text between the first and second double quote. The
/// key name before the quote is not checked.
pub fn version_from_line(line: &str) -> Result<Version, VersionError> {
    let quoted = line
        .split('"')
        .nth(1)
        .ok_or_else(|| VersionError::MissingQuotedVersion {
            line: line.trim_end().to_string(),
        })?;

    quoted.parse()
}
