//! Step output publication.
//!
//! GitHub Actions collects step outputs from the file named by
//! `GITHUB_OUTPUT`, one `name<<delimiter` heredoc block per output. The
//! delimiter must not occur in the value, so a fresh UUID is used each time.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use uuid::Uuid;

/// Publish a step output if `GITHUB_OUTPUT` is set.
///
/// Returns whether the output was written. Outside a runner (no
/// `GITHUB_OUTPUT`) this is a silent no-op: the manifest file itself is
/// the useful artifact there.
pub fn publish_output(name: &str, value: &str) -> Result<bool> {
    let Some(path) = std::env::var_os("GITHUB_OUTPUT") else {
        return Ok(false);
    };
    write_output(Path::new(&path), name, value)?;
    Ok(true)
}

/// Append one heredoc-delimited output block to the output file.
pub fn write_output(path: &Path, name: &str, value: &str) -> Result<()> {
    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open step output file {:?}", path))?;

    writeln!(file, "{name}<<{delimiter}")?;
    if value.ends_with('\n') {
        write!(file, "{value}")?;
    } else {
        writeln!(file, "{value}")?;
    }
    writeln!(file, "{delimiter}")?;

    Ok(())
}
