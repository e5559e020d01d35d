//! Shared helpers for the example binaries: tracing setup and SVG output.
use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::info;

/// Initialize a simple console subscriber. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_target(false).try_init();
}

/// Write an SVG document next to the working directory, creating the parent
/// directory if needed.
pub fn write_svg_file(path: impl AsRef<Path>, markup: &str) -> anyhow::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, markup).with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}
