//! Snapshot of the CI invocation context.
//!
//! GitHub Actions delivers the triggering event and runner identity through
//! environment variables and a payload file. [`ActionContext::from_env`]
//! captures all of it once, up front; every collector downstream is a pure
//! function of the resulting struct.

use std::path::PathBuf;

use serde_json::Value;
use tracing::warn;

use crate::error::{Result, ShipstampError};

/// Everything the manifest collectors need from the ambient environment.
#[derive(Debug, Clone)]
pub struct ActionContext {
    /// Checked-out workspace root (`GITHUB_WORKSPACE`).
    pub workspace: PathBuf,

    /// Name of the triggering event (`GITHUB_EVENT_NAME`), e.g. `push`.
    pub event_name: String,

    /// Full webhook payload of the triggering event, loaded from the file
    /// named by `GITHUB_EVENT_PATH`. Empty object when no payload exists.
    pub payload: Value,

    /// Commit SHA that triggered the workflow (`GITHUB_SHA`).
    pub sha: Option<String>,

    /// Fully-formed ref, e.g. `refs/heads/main` (`GITHUB_REF`).
    pub git_ref: Option<String>,

    /// Short ref name, e.g. `main` (`GITHUB_REF_NAME`).
    pub ref_name: Option<String>,

    /// Workflow name (`GITHUB_WORKFLOW`).
    pub workflow: Option<String>,

    /// Run number as delivered, unparsed (`GITHUB_RUN_NUMBER`).
    pub run_number: Option<String>,

    /// Runner architecture (`RUNNER_ARCH`).
    pub runner_arch: Option<String>,

    /// Runner name (`RUNNER_NAME`).
    pub runner_name: Option<String>,

    /// Runner operating system (`RUNNER_OS`).
    pub runner_os: Option<String>,
}

impl ActionContext {
    /// Capture the invocation context from the process environment.
    ///
    /// Fails with [`ShipstampError::WorkspaceMissing`] when
    /// `GITHUB_WORKSPACE` is unset or empty, before anything else runs.
    pub fn from_env() -> Result<Self> {
        let workspace = std::env::var("GITHUB_WORKSPACE")
            .ok()
            .filter(|w| !w.is_empty())
            .ok_or(ShipstampError::WorkspaceMissing)?;

        Ok(Self {
            workspace: PathBuf::from(workspace),
            event_name: std::env::var("GITHUB_EVENT_NAME").unwrap_or_default(),
            payload: load_event_payload()?,
            sha: std::env::var("GITHUB_SHA").ok(),
            git_ref: std::env::var("GITHUB_REF").ok(),
            ref_name: std::env::var("GITHUB_REF_NAME").ok(),
            workflow: std::env::var("GITHUB_WORKFLOW").ok(),
            run_number: std::env::var("GITHUB_RUN_NUMBER").ok(),
            runner_arch: std::env::var("RUNNER_ARCH").ok(),
            runner_name: std::env::var("RUNNER_NAME").ok(),
            runner_os: std::env::var("RUNNER_OS").ok(),
        })
    }

    /// Context with only the workspace set. Used to build contexts by hand.
    pub fn minimal(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
            event_name: String::new(),
            payload: Value::Object(serde_json::Map::new()),
            sha: None,
            git_ref: None,
            ref_name: None,
            workflow: None,
            run_number: None,
            runner_arch: None,
            runner_name: None,
            runner_os: None,
        }
    }
}

/// Load the webhook payload from `GITHUB_EVENT_PATH`.
///
/// A missing variable or file yields an empty object (with a warning, the
/// runner normally always provides one). A payload that exists but is not
/// valid JSON is an error.
fn load_event_payload() -> Result<Value> {
    let Some(path) = std::env::var("GITHUB_EVENT_PATH").ok().map(PathBuf::from) else {
        return Ok(Value::Object(serde_json::Map::new()));
    };

    if !path.exists() {
        warn!("event payload file {:?} does not exist", path);
        return Ok(Value::Object(serde_json::Map::new()));
    }

    let raw = std::fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation is process-global, so everything that touches
    // env vars lives in this single test.
    #[test]
    fn test_from_env_snapshot_and_preflight() {
        let dir = tempfile::tempdir().unwrap();
        let event_path = dir.path().join("event.json");
        std::fs::write(
            &event_path,
            r#"{"repository":{"ssh_url":"git@github.com:org/repo.git"}}"#,
        )
        .unwrap();

        std::env::set_var("GITHUB_WORKSPACE", dir.path());
        std::env::set_var("GITHUB_EVENT_NAME", "push");
        std::env::set_var("GITHUB_EVENT_PATH", &event_path);
        std::env::set_var("GITHUB_SHA", "0123456789abcdef0123456789abcdef01234567");
        std::env::set_var("GITHUB_REF", "refs/heads/main");
        std::env::set_var("GITHUB_REF_NAME", "main");
        std::env::set_var("GITHUB_WORKFLOW", "ci");
        std::env::set_var("GITHUB_RUN_NUMBER", "42");
        std::env::set_var("RUNNER_ARCH", "X64");
        std::env::set_var("RUNNER_NAME", "hosted-1");
        std::env::set_var("RUNNER_OS", "Linux");

        let ctx = ActionContext::from_env().unwrap();
        assert_eq!(ctx.workspace, dir.path());
        assert_eq!(ctx.event_name, "push");
        assert_eq!(
            ctx.payload["repository"]["ssh_url"],
            "git@github.com:org/repo.git"
        );
        assert_eq!(ctx.sha.as_deref(), Some("0123456789abcdef0123456789abcdef01234567"));
        assert_eq!(ctx.ref_name.as_deref(), Some("main"));
        assert_eq!(ctx.run_number.as_deref(), Some("42"));
        assert_eq!(ctx.runner_os.as_deref(), Some("Linux"));

        // Empty workspace counts as missing.
        std::env::set_var("GITHUB_WORKSPACE", "");
        let err = ActionContext::from_env().unwrap_err();
        assert!(matches!(err, ShipstampError::WorkspaceMissing));

        std::env::remove_var("GITHUB_WORKSPACE");
        let err = ActionContext::from_env().unwrap_err();
        assert!(matches!(err, ShipstampError::WorkspaceMissing));
    }

    #[test]
    fn test_minimal_context_has_empty_payload() {
        let ctx = ActionContext::minimal("/tmp/ws");
        assert_eq!(ctx.event_name, "");
        assert!(ctx.payload.as_object().unwrap().is_empty());
        assert!(ctx.sha.is_none());
    }
}
