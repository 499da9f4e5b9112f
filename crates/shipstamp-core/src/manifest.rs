//! Build manifest data model.
//!
//! A [`Manifest`] is a flat record with a required `timestamp` and three
//! optional fragments, each gated by its own toggle. The `scm` fragment is
//! tri-state: key absent (toggle off), key `null` (toggle on but the
//! triggering event is not recognized), or a populated object.
//!
//! Serialized keys are camelCase at every level.

use serde::{Deserialize, Deserializer, Serialize};

/// Source-control fragment of the manifest.
///
/// Every field is optional: the triggering event payload does not always
/// carry all of them, and absent values are omitted from the JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScmInfo {
    /// Name of the triggering event (`push`, `pull_request`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,

    /// SSH clone URL of the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_url: Option<String>,

    /// HTTPS clone URL of the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clone_url: Option<String>,

    /// Branch name, from the runner's ref-name variable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Full commit SHA that triggered the build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,

    /// `sha-` + first 7 hex chars of the commit, the tag format emitted
    /// by docker/metadata-action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_commit: Option<String>,

    /// Fully-formed ref, e.g. `refs/heads/main`.
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
}

/// Package fragment: name and version lifted from the project manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
}

/// Runner identity, nested inside [`ActionInfo`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RunnerInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
}

/// Workflow/runner fragment of the manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActionInfo {
    /// Workflow name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow: Option<String>,

    /// Run number; absent when unset or non-numeric.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_number: Option<u64>,

    /// Runner identity. Always present, fields may be empty.
    pub runner: RunnerInfo,
}

/// The build manifest written at the end of a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    /// ISO-8601 UTC timestamp taken at invocation time.
    pub timestamp: String,

    /// Source-control fragment. Outer `None` = toggle off (key absent),
    /// `Some(None)` = toggle on but event unrecognized (key is `null`).
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub scm: Option<Option<ScmInfo>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<PackageInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionInfo>,
}

/// Distinguish a key set to `null` from an absent key when deserializing.
///
/// Serde flattens `null` into the outer `Option` by default; wrapping the
/// parsed value in `Some` keeps the outer level meaning "key was present".
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
