use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::release::Release;

/// Write releases as an indented JSON array. An empty slice still writes `[]`.
pub fn save_releases(path: &Path, releases: &[Release]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    // serde_json leaves non-ASCII characters as raw UTF-8
    serde_json::to_writer_pretty(&mut out, releases)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

// ── Tests ──
