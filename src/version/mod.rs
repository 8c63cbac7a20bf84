//! Dotted version parsing and patch bumping.

pub mod bump;
pub mod parse;

pub use bump::bump_patch;
pub use parse::{Version, version_from_line};
