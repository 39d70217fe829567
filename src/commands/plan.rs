//! `sentry-symbols plan` - Show the planned invocations without executing
//!
//! Useful for reviewing what a pipeline run would do. The auth token is
//! redacted in both output formats, and the plan ID is a content hash so
//! identical configurations produce identical IDs across CI runs.

use crate::core::config::StepConfig;
use crate::core::error::StepResult;
use crate::core::plan::StepPlan;

/// Run the plan command
pub fn run_plan(cfg: &StepConfig, json: bool) -> StepResult<()> {
  let plan = StepPlan::build(cfg)?;

  if json {
    println!("{}", plan.to_json()?);
  } else {
    print!("{}", plan.to_human_readable());
  }

  Ok(())
}
