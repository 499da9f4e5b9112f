//! Manifest assembly and the write/stamp sequence.

use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use tracing::{debug, info};

use crate::action::collect_action;
use crate::context::ActionContext;
use crate::dockerfile::append_copy_instruction;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::package::collect_package;
use crate::scm::collect_scm;

/// Toggles and paths for one manifest generation run.
#[derive(Debug, Clone)]
pub struct ManifestConfig {
    /// Include the source-control fragment.
    pub scm_info: bool,

    /// Include the package fragment.
    pub package_info: bool,

    /// Include the workflow/runner fragment.
    pub action_info: bool,

    /// Append a COPY for the manifest to the Dockerfile.
    pub append_dockerfile: bool,

    /// Package manifest location, tried directly then under the workspace.
    pub package_json: PathBuf,

    /// Dockerfile location, tried directly then under the workspace.
    pub dockerfile: PathBuf,

    /// Where the generated manifest is written.
    pub manifest_file: PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            scm_info: false,
            package_info: false,
            action_info: false,
            append_dockerfile: false,
            package_json: PathBuf::from("package.json"),
            dockerfile: PathBuf::from("Dockerfile"),
            manifest_file: PathBuf::from("manifest.json"),
        }
    }
}

/// Assemble the manifest record for this invocation.
///
/// Collects each fragment whose toggle is enabled and stamps the current
/// UTC time. The package collector is the only fallible one; its failure
/// aborts before anything is written.
pub fn build_manifest(config: &ManifestConfig, ctx: &ActionContext) -> Result<Manifest> {
    let scm = config.scm_info.then(|| collect_scm(ctx));

    let package = if config.package_info {
        Some(collect_package(&config.package_json, &ctx.workspace)?)
    } else {
        None
    };

    let action = config.action_info.then(|| collect_action(ctx));

    Ok(Manifest {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        scm,
        package,
        action,
    })
}

/// Build the manifest, write it as pretty JSON, and stamp the Dockerfile
/// when requested. Returns the serialized content so the caller can expose
/// it as a step output.
pub fn generate(config: &ManifestConfig, ctx: &ActionContext) -> Result<String> {
    debug!(
        manifest_file = %config.manifest_file.display(),
        scm_info = config.scm_info,
        package_info = config.package_info,
        action_info = config.action_info,
        "generating build manifest"
    );

    let manifest = build_manifest(config, ctx)?;

    let content = format!("{}\n", serde_json::to_string_pretty(&manifest)?);
    std::fs::write(&config.manifest_file, &content)?;

    if config.append_dockerfile {
        // The COPY references the manifest by name: the image build picks
        // it up from the build context root, wherever it was written.
        let manifest_name = config
            .manifest_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| config.manifest_file.display().to_string());
        let stamped = append_copy_instruction(&config.dockerfile, &ctx.workspace, &manifest_name)?;
        info!(
            manifest = %config.manifest_file.display(),
            dockerfile = %stamped.display(),
            "manifest written and Dockerfile stamped"
        );
    } else {
        info!(manifest = %config.manifest_file.display(), "manifest written");
    }

    Ok(content)
}
