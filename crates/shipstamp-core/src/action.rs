//! Workflow/runner fragment collection.

use crate::context::ActionContext;
use crate::manifest::{ActionInfo, RunnerInfo};

/// Collect the workflow/runner fragment. Pure context read, cannot fail:
/// anything unset simply stays absent.
pub fn collect_action(ctx: &ActionContext) -> ActionInfo {
    ActionInfo {
        workflow: ctx.workflow.clone(),
        run_number: ctx.run_number.as_deref().and_then(|n| n.parse().ok()),
        runner: RunnerInfo {
            arch: ctx.runner_arch.clone(),
            name: ctx.runner_name.clone(),
            os: ctx.runner_os.clone(),
        },
    }
}
