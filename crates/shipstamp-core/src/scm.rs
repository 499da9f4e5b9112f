//! Source-control fragment collection.

use serde_json::Value;

use crate::context::ActionContext;
use crate::manifest::ScmInfo;

/// Event types that carry usable repository/commit information.
const RECOGNIZED_EVENTS: [&str; 3] = ["push", "pull_request", "workflow_dispatch"];

/// Collect the source-control fragment from the invocation context.
///
/// Returns `None` when the triggering event is not one of
/// [`RECOGNIZED_EVENTS`]; the caller serializes that as an explicit `null`
/// so a reader can tell "asked for but unavailable" from "not asked for".
pub fn collect_scm(ctx: &ActionContext) -> Option<ScmInfo> {
    if !RECOGNIZED_EVENTS.contains(&ctx.event_name.as_str()) {
        return None;
    }

    let repository = &ctx.payload["repository"];
    let short_commit = ctx.sha.as_deref().map(short_commit_tag);

    Some(ScmInfo {
        event_name: Some(ctx.event_name.clone()),
        ssh_url: string_field(repository, "ssh_url"),
        clone_url: string_field(repository, "clone_url"),
        branch: ctx.ref_name.clone(),
        commit: ctx.sha.clone(),
        short_commit,
        git_ref: ctx.git_ref.clone(),
    })
}

/// `sha-<first 7 hex chars>`, the tag docker/metadata-action emits by default.
fn short_commit_tag(sha: &str) -> String {
    format!("sha-{}", &sha[..7.min(sha.len())])
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value[key].as_str().map(str::to_string)
}
