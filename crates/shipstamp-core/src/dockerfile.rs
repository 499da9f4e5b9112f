//! Dockerfile stamping: append a COPY for the generated manifest.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::resolve::resolve_file;

/// Append `COPY <manifest_file> ./` (preceded by a blank line) to the
/// Dockerfile at `path`, resolved directly or under the workspace root.
///
/// The Dockerfile must already exist; this never creates one. Returns the
/// resolved path.
pub fn append_copy_instruction(
    path: &Path,
    workspace: &Path,
    manifest_file: &str,
) -> Result<PathBuf> {
    let instruction = format!("\nCOPY {manifest_file} ./\n");

    let dockerfile = resolve_file(path, workspace)?;
    debug!(
        "appending instruction to Dockerfile {:?}: {}",
        dockerfile,
        instruction.trim()
    );

    let mut file = std::fs::OpenOptions::new().append(true).open(&dockerfile)?;
    file.write_all(instruction.as_bytes())?;

    Ok(dockerfile)
}
