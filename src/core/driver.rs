//! Step sequencing
//!
//! Drives the planned invocations through an explicit finite-state sequence:
//!
//! ```text
//! Idle → UploadingArtifacts → ReleaseStage → LinkingCommits → Done
//! ```
//!
//! Every transition is fail-fast: the first failing invocation ends the run
//! with its captured output, and no later invocation is ever attempted. The
//! `Failed` terminal state is the `Err` arm of `execute`. When no release
//! version is configured, `ReleaseStage` and `LinkingCommits` are skipped
//! entirely and the driver goes straight to `Done` after the uploads.
//!
//! Invocations run strictly sequentially; the driver blocks on each child
//! process with no timeout.

use crate::core::config::StepConfig;
use crate::core::error::{StepError, StepResult};
use crate::core::plan::{self, Invocation};
use crate::core::runner::{CommandRunner, Execution, Outcome};

/// Printed (and returned) once every planned upload has succeeded
pub const UPLOADS_DONE_MARKER: &str = "Uploads completed";

/// Printed when release tracking is skipped because no version is configured
pub const SKIP_RELEASE_MARKER: &str =
  "No release version declared, skipping Suspect Commit tracking...";

/// Driver states; data-carrying states hold what the next transition needs
enum Stage {
  Idle,
  UploadingArtifacts(Vec<Invocation>),
  ReleaseStage,
  LinkingCommits,
  Done,
}

/// Execute the full step sequence against the given runner
///
/// Returns the upload success marker on full success; any planning error or
/// invocation failure is returned as the terminal `Failed` outcome.
pub fn execute<R: CommandRunner>(cfg: &StepConfig, runner: &R) -> StepResult<String> {
  let mut stage = Stage::Idle;

  loop {
    stage = match stage {
      Stage::Idle => Stage::UploadingArtifacts(plan::select_uploads(cfg)?),

      Stage::UploadingArtifacts(uploads) => {
        for invocation in &uploads {
          println!("{}", plan::upload_progress_line(invocation));
          let args = plan::build_upload_args(cfg, invocation);
          let output = require_success(runner.run(plan::SENTRY_CLI, &args))?;
          print_output(&output);
        }
        println!("{}", UPLOADS_DONE_MARKER);

        if cfg.has_release() {
          Stage::ReleaseStage
        } else {
          println!("{}", SKIP_RELEASE_MARKER);
          Stage::Done
        }
      }

      Stage::ReleaseStage => {
        println!("{}", plan::release_progress_line(cfg));
        let args = plan::build_release_args(cfg);
        let output = require_success(runner.run(plan::SENTRY_CLI, &args))?;
        print_output(&output);
        Stage::LinkingCommits
      }

      Stage::LinkingCommits => {
        println!("{}", plan::link_progress_line(cfg));
        let args = plan::build_link_args(cfg);
        let output = require_success(runner.run(plan::SENTRY_CLI, &args))?;
        print_output(&output);
        Stage::Done
      }

      Stage::Done => return Ok(UPLOADS_DONE_MARKER.to_string()),
    };
  }
}

/// Unwrap an execution, carrying the captured output into the error on failure
fn require_success(exec: Execution) -> StepResult<Vec<u8>> {
  match exec.outcome {
    Outcome::Success => Ok(exec.output),
    Outcome::Failed { reason } => Err(StepError::Invocation {
      message: reason,
      output: exec.output,
    }),
  }
}

/// Echo the external tool's captured output verbatim
fn print_output(output: &[u8]) {
  if !output.is_empty() {
    print!("{}", String::from_utf8_lossy(output));
  }
}
