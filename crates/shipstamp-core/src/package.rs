//! Package fragment collection from a `package.json`-style manifest.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::manifest::PackageInfo;
use crate::resolve::resolve_file;

/// The two fields lifted from the package manifest. Everything else in the
/// file is ignored.
#[derive(Debug, Deserialize)]
struct PackageManifest {
    name: String,
    version: String,
}

/// Read `name` and `version` from the package manifest at `path`,
/// resolving it directly or under the workspace root.
///
/// A missing file (both candidates) or a malformed manifest is an error.
pub fn collect_package(path: &Path, workspace: &Path) -> Result<PackageInfo> {
    let location = resolve_file(path, workspace)?;
    let raw = std::fs::read_to_string(&location)?;
    let parsed: PackageManifest = serde_json::from_str(&raw)?;

    Ok(PackageInfo {
        name: parsed.name,
        version: parsed.version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShipstampError;

    #[test]
    fn test_collects_name_and_version() {
        let workspace = tempfile::tempdir().unwrap();
        std::fs::write(
            workspace.path().join("package.json"),
            r#"{"name":"demo","version":"1.2.3","scripts":{"build":"tsc"}}"#,
        )
        .unwrap();

        let info = collect_package(Path::new("package.json"), workspace.path()).unwrap();
        assert_eq!(info.name, "demo");
        assert_eq!(info.version, "1.2.3");
    }

    #[test]
    fn test_missing_file_fails() {
        let workspace = tempfile::tempdir().unwrap();
        let err = collect_package(Path::new("package.json"), workspace.path()).unwrap_err();
        assert!(matches!(err, ShipstampError::FileNotFound { .. }));
    }

    #[test]
    fn test_malformed_manifest_fails() {
        let workspace = tempfile::tempdir().unwrap();
        std::fs::write(workspace.path().join("package.json"), "{not json").unwrap();

        let err = collect_package(Path::new("package.json"), workspace.path()).unwrap_err();
        assert!(matches!(err, ShipstampError::Serialization(_)));
    }

    #[test]
    fn test_manifest_without_version_fails() {
        let workspace = tempfile::tempdir().unwrap();
        std::fs::write(workspace.path().join("package.json"), r#"{"name":"demo"}"#).unwrap();

        let err = collect_package(Path::new("package.json"), workspace.path()).unwrap_err();
        assert!(matches!(err, ShipstampError::Serialization(_)));
    }
}
