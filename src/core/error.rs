//! Error types for sentry-symbols
//!
//! Every error in this step is terminal: there is no retry or partial
//! continuation, so each variant maps straight to a process exit code.
//! Invocation failures carry the external tool's captured output so the
//! operator always sees the tool's own diagnostics after the message.

use std::fmt;

pub type StepResult<T> = Result<T, StepError>;

/// Top-level error type for the step
#[derive(Debug)]
pub enum StepError {
  /// Invalid step configuration, detected before any invocation
  Config(ConfigError),

  /// An external sentry-cli invocation failed (non-zero exit or spawn failure)
  Invocation {
    message: String,
    /// Combined stdout+stderr captured up to the failure, never discarded
    output: Vec<u8>,
  },

  /// Generic error message
  Message(String),
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
  /// The platform selector is not one of "ios", "android", "both"
  InvalidPlatform { value: String },
}

impl StepError {
  /// Create a simple message error
  pub fn message(message: impl Into<String>) -> Self {
    StepError::Message(message.into())
  }

  /// Process exit code for this error
  ///
  /// Configuration errors exit with 2 (bad input, nothing was attempted),
  /// everything else with 1.
  pub fn exit_code(&self) -> ExitCode {
    match self {
      StepError::Config(_) => ExitCode(2),
      _ => ExitCode(1),
    }
  }
}

impl fmt::Display for StepError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      StepError::Config(err) => write!(f, "{}", err),
      StepError::Invocation { message, .. } => write!(f, "{}", message),
      StepError::Message(message) => write!(f, "{}", message),
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::InvalidPlatform { value } => {
        write!(
          f,
          "Invalid platform '{}'. Must be 'ios', 'android', or 'both'",
          value
        )
      }
    }
  }
}

impl std::error::Error for StepError {}

/// Process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
  pub fn as_i32(self) -> i32 {
    self.0
  }
}

/// Print an error for the operator: the message first, then any captured
/// output from the external tool
pub fn print_error(err: &StepError) {
  eprintln!("Error: {}", err);

  if let StepError::Invocation { output, .. } = err
    && !output.is_empty()
  {
    eprintln!("{}", String::from_utf8_lossy(output));
  }
}

/// Extension trait for adding context to foreign errors
pub trait ResultExt<T> {
  fn context(self, msg: &str) -> StepResult<T>;
}

impl<T, E: fmt::Display> ResultExt<T> for Result<T, E> {
  fn context(self, msg: &str) -> StepResult<T> {
    self.map_err(|e| StepError::message(format!("{}: {}", msg, e)))
  }
}
