//! Process execution seam
//!
//! The single abstraction boundary of this step: the driver only ever talks
//! to a `CommandRunner`, so every sequencing rule can be tested with a
//! scripted double and no real process creation. The production runner
//! spawns the external tool and combines stdout and stderr into one stream,
//! regardless of exit code; partial output is always returned.

use std::process::Command;

/// Success or failure of one external invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  Success,
  Failed { reason: String },
}

/// Result of one external invocation: the combined output plus the outcome
#[derive(Debug, Clone)]
pub struct Execution {
  /// Combined stdout+stderr, available even when the invocation failed
  pub output: Vec<u8>,
  pub outcome: Outcome,
}

/// Executes an external program with an argument vector
///
/// Infallible signature: spawn failures and non-zero exits are both carried
/// inside the returned `Execution`, never as a separate error path, so the
/// captured output is never lost.
pub trait CommandRunner {
  fn run(&self, program: &str, args: &[String]) -> Execution;
}

/// Production runner backed by real process creation
///
/// Blocks until the child exits; no timeout is applied.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
  fn run(&self, program: &str, args: &[String]) -> Execution {
    match Command::new(program).args(args).output() {
      Ok(out) => {
        let mut output = out.stdout;
        output.extend_from_slice(&out.stderr);

        let outcome = if out.status.success() {
          Outcome::Success
        } else {
          let code = out
            .status
            .code()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "terminated by signal".to_string());
          Outcome::Failed {
            reason: format!("{} exited with status {}", program, code),
          }
        };

        Execution { output, outcome }
      }
      Err(e) => Execution {
        output: Vec::new(),
        outcome: Outcome::Failed {
          reason: format!("Failed to start {}: {}", program, e),
        },
      },
    }
  }
}
