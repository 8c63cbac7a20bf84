//! Patch bumping.

use super::parse::Version;

/// Return a copy of `version` with its last component incremented by one.
///
/// Other components are never touched; there is no carry, so `1.2.9`
/// becomes `1.2.10`.
pub fn bump_patch(version: &Version) -> Version {
    let mut next = version.clone();

    if let Some(last) = next.components_mut().last_mut() {
        *last = increment_decimal(last.as_str());
    }

    next
}

/// Add one to a string of ASCII decimal digits.
fn increment_decimal(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();

    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }

    // All nines.
    format!("1{}", String::from_utf8_lossy(&bytes))
}
