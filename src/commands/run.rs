//! `sentry-symbols run` - Execute the full step sequence
//!
//! Prints the redacted configuration, then drives the planned invocations
//! against the real sentry-cli binary. The first failure terminates the run
//! with its captured output; success prints the completion marker.

use crate::core::config::StepConfig;
use crate::core::driver;
use crate::core::error::StepResult;
use crate::core::runner::SystemRunner;

/// Run the step
pub fn run_step(cfg: &StepConfig) -> StepResult<()> {
  cfg.print_summary();

  driver::execute(cfg, &SystemRunner)?;
  Ok(())
}
