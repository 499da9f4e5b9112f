//! shipstamp - stamp a build manifest into CI images
//!
//! Generates a JSON manifest describing the current build (timestamp plus
//! optional source-control, package, and runner fragments), writes it to a
//! file, and optionally appends a COPY for it to a Dockerfile.
//!
//! Every input is a long flag that also binds to the `INPUT_*` environment
//! variable a GitHub Actions runner sets, so the same binary runs as an
//! action step or straight from a shell:
//!
//! ```text
//! shipstamp --scm-info --package-info --append-dockerfile
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use shipstamp_core::{generate, ActionContext, ManifestConfig};

mod output;

#[derive(Parser)]
#[command(name = "shipstamp")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Stamp a build manifest into CI images", long_about = None)]
struct Cli {
    /// Include source-control info in the manifest
    #[arg(long, env = "INPUT_SCM_INFO")]
    scm_info: bool,

    /// Include package name/version from the package manifest
    #[arg(long, env = "INPUT_PACKAGE_INFO")]
    package_info: bool,

    /// Include workflow/runner info in the manifest
    #[arg(long, env = "INPUT_ACTION_INFO")]
    action_info: bool,

    /// Append a COPY for the manifest to the Dockerfile
    #[arg(long, env = "INPUT_APPEND_DOCKERFILE")]
    append_dockerfile: bool,

    /// Package manifest location (tried directly, then under the workspace)
    #[arg(long, env = "INPUT_PACKAGE_JSON", default_value = "package.json")]
    package_json: PathBuf,

    /// Dockerfile location (tried directly, then under the workspace)
    #[arg(long, env = "INPUT_DOCKERFILE", default_value = "Dockerfile")]
    dockerfile: PathBuf,

    /// Where to write the generated manifest
    #[arg(long, env = "INPUT_MANIFEST_FILE", default_value = "manifest.json")]
    manifest_file: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    shipstamp_core::init_tracing(cli.json, level);

    let ctx = ActionContext::from_env().context("Failed to capture the CI context")?;

    let config = ManifestConfig {
        scm_info: cli.scm_info,
        package_info: cli.package_info,
        action_info: cli.action_info,
        append_dockerfile: cli.append_dockerfile,
        package_json: cli.package_json,
        dockerfile: cli.dockerfile,
        manifest_file: cli.manifest_file,
    };

    let content = generate(&config, &ctx).context("Failed to generate the build manifest")?;

    output::publish_output("manifest-content", &content)
        .context("Failed to publish the manifest-content output")?;

    if config.append_dockerfile {
        println!(
            "📝 Manifest: {} + COPY to Dockerfile",
            config.manifest_file.display()
        );
    } else {
        println!("📝 Manifest: {}", config.manifest_file.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_and_defaults() {
        let cli = Cli::parse_from(["shipstamp", "--scm-info", "--manifest-file", "out.json"]);

        assert!(cli.scm_info);
        assert!(!cli.package_info);
        assert!(!cli.append_dockerfile);
        assert_eq!(cli.manifest_file, PathBuf::from("out.json"));
        assert_eq!(cli.package_json, PathBuf::from("package.json"));
        assert_eq!(cli.dockerfile, PathBuf::from("Dockerfile"));
    }
}
