//! Two-step file resolution shared by the package and Dockerfile steps.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{Result, ShipstampError};

/// Locate a file either at `path` directly or under the workspace root.
///
/// Tries `path` as given first; on a miss, warns and retries with the path
/// joined under `workspace`. Never creates anything. If both candidates are
/// missing, the error names the original request and the last location
/// searched.
pub fn resolve_file(path: &Path, workspace: &Path) -> Result<PathBuf> {
    if path.exists() {
        return Ok(path.to_path_buf());
    }

    warn!(
        "{:?} not found, searching in the workspace {:?}",
        path, workspace
    );

    let fallback = workspace.join(path);
    if fallback.exists() {
        return Ok(fallback);
    }

    Err(ShipstampError::FileNotFound {
        requested: path.display().to_string(),
        searched: fallback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("Dockerfile");
        std::fs::write(&file, "FROM base\n").unwrap();

        let found = resolve_file(&file, Path::new("/nonexistent")).unwrap();
        assert_eq!(found, file);
    }

    #[test]
    fn test_falls_back_to_workspace() {
        let workspace = tempfile::tempdir().unwrap();
        std::fs::write(workspace.path().join("package.json"), "{}").unwrap();

        let found = resolve_file(Path::new("package.json"), workspace.path()).unwrap();
        assert_eq!(found, workspace.path().join("package.json"));
    }

    #[test]
    fn test_missing_everywhere_is_descriptive() {
        let workspace = tempfile::tempdir().unwrap();

        let err = resolve_file(Path::new("package.json"), workspace.path()).unwrap_err();
        match err {
            ShipstampError::FileNotFound {
                requested,
                searched,
            } => {
                assert_eq!(requested, "package.json");
                assert_eq!(searched, workspace.path().join("package.json"));
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }
}
