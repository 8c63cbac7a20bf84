//! patchbump - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use patchbump::{MANIFEST_FILE, bump_manifest};

/// Increment the patch version in a Project.toml manifest.
#[derive(Parser, Debug)]
#[command(name = "patchbump")]
#[command(about = "Increment the patch version in a Project.toml manifest")]
#[command(version)]
struct Cli {
    /// Path to the manifest file
    #[arg(default_value = MANIFEST_FILE)]
    manifest: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    bump_manifest(&cli.manifest)
        .with_context(|| format!("Failed to bump version in {}", cli.manifest.display()))?;

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
