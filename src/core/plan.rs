//! Invocation planning for sentry-cli
//!
//! The planner is the only part of the step with real decision logic: given
//! the configuration it derives which sentry-cli invocations to run, in what
//! order, and with exactly which argument vectors. Everything here is pure;
//! no process is ever spawned from this module.
//!
//! Argument order is significant and must match sentry-cli's grammar:
//! global flags first, then the subcommand and its own flags, the file path
//! last, and `--log-level=debug` appended last when debug mode is enabled.

use crate::core::config::StepConfig;
use crate::core::error::{ConfigError, StepError, StepResult};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// External binary every invocation targets
pub const SENTRY_CLI: &str = "sentry-cli";

/// `sentry-cli` subcommand that uploads a dSYM bundle
pub const UPLOAD_DIF_CMD: &str = "upload-dif";

/// `sentry-cli` subcommand that uploads a Proguard mapping
pub const UPLOAD_PROGUARD_CMD: &str = "upload-proguard";

/// `sentry-cli` subcommand group for release management
pub const RELEASES_CMD: &str = "releases";

/// Appended to every invocation when debug mode is enabled
pub const LOG_DEBUG_ARG: &str = "--log-level=debug";

/// One planned artifact upload: a sentry-cli subcommand plus the local
/// file path it uploads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
  pub subcommand: String,
  pub file_path: String,
}

/// Map the platform selector to the ordered upload list
///
/// Exactly the literal values "ios", "android", and "both" are accepted;
/// anything else is a terminal configuration error and no invocation is
/// attempted. For "both" the order is always dSYM first, Proguard second.
pub fn select_uploads(cfg: &StepConfig) -> StepResult<Vec<Invocation>> {
  let dsym = Invocation {
    subcommand: UPLOAD_DIF_CMD.to_string(),
    file_path: cfg.dsym_path.clone(),
  };
  let proguard = Invocation {
    subcommand: UPLOAD_PROGUARD_CMD.to_string(),
    file_path: cfg.proguard_mapping_path.clone(),
  };

  match cfg.platform.as_str() {
    "ios" => Ok(vec![dsym]),
    "android" => Ok(vec![proguard]),
    "both" => Ok(vec![dsym, proguard]),
    other => Err(StepError::Config(ConfigError::InvalidPlatform {
      value: other.to_string(),
    })),
  }
}

/// Shared prefix of every sentry-cli invocation:
/// `--auth-token <token> <subcommand> --org <org> --project <project>`
fn base_args(cfg: &StepConfig, subcommand: &str) -> Vec<String> {
  vec![
    "--auth-token".to_string(),
    cfg.auth_token.clone(),
    subcommand.to_string(),
    "--org".to_string(),
    cfg.org_slug.clone(),
    "--project".to_string(),
    cfg.project_slug.clone(),
  ]
}

fn with_debug_flag(cfg: &StepConfig, mut args: Vec<String>) -> Vec<String> {
  if cfg.is_debug() {
    args.push(LOG_DEBUG_ARG.to_string());
  }
  args
}

/// Argument vector for one artifact upload
///
/// Pure function of the configuration and the invocation; empty fields pass
/// through as empty-string arguments for sentry-cli to reject.
pub fn build_upload_args(cfg: &StepConfig, invocation: &Invocation) -> Vec<String> {
  let mut args = base_args(cfg, &invocation.subcommand);
  args.push(invocation.file_path.clone());
  with_debug_flag(cfg, args)
}

/// Argument vector that creates and finalizes the configured release
pub fn build_release_args(cfg: &StepConfig) -> Vec<String> {
  let mut args = base_args(cfg, RELEASES_CMD);
  args.push("new".to_string());
  args.push("--finalize".to_string());
  args.push(cfg.release_version.clone());
  with_debug_flag(cfg, args)
}

/// Argument vector that links commits to the configured release
///
/// Manual variant (`set-commits --commit <commits>`) when the
/// associated-commits field is non-empty, automatic variant
/// (`set-commits --auto`) otherwise.
pub fn build_link_args(cfg: &StepConfig) -> Vec<String> {
  let mut args = base_args(cfg, RELEASES_CMD);
  args.push("set-commits".to_string());
  if cfg.associated_commits.is_empty() {
    args.push("--auto".to_string());
  } else {
    args.push("--commit".to_string());
    args.push(cfg.associated_commits.clone());
  }
  args.push(cfg.release_version.clone());
  with_debug_flag(cfg, args)
}

/// Progress line printed before an artifact upload
pub fn upload_progress_line(invocation: &Invocation) -> String {
  format!(
    "Executing {}, uploading {}...",
    invocation.subcommand, invocation.file_path
  )
}

/// Progress line printed before creating and finalizing the release
pub fn release_progress_line(cfg: &StepConfig) -> String {
  format!(
    "Executing {} command, creating and finalizing release: {}",
    RELEASES_CMD, cfg.release_version
  )
}

/// Progress line printed before linking commits to the release
pub fn link_progress_line(cfg: &StepConfig) -> String {
  if cfg.associated_commits.is_empty() {
    format!(
      "Automatically linking commits to release: {}...",
      cfg.release_version
    )
  } else {
    format!(
      "Manually linking {}, to release: {}...",
      cfg.associated_commits, cfg.release_version
    )
  }
}

/// Plan identifier (SHA256 hash of plan contents)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanId(String);

impl PlanId {
  /// Create a plan ID from plan contents
  pub fn from_contents(contents: &[u8]) -> Self {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    let result = hasher.finalize();
    Self(format!("{:x}", result))
  }

  /// Get the short ID (first 12 characters)
  pub fn short(&self) -> &str {
    &self.0[..12.min(self.0.len())]
  }
}

impl fmt::Display for PlanId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.short())
  }
}

/// One fully resolved external command in a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedCommand {
  /// Operator-facing one-liner, identical to the driver's progress line
  pub summary: String,
  pub program: String,
  pub args: Vec<String>,
}

/// The full ordered invocation sequence for one step execution
///
/// Used by the `plan` subcommand for dry-run output. The auth token is
/// redacted before the plan is hashed or serialized, so plan IDs are
/// comparable across environments without leaking secrets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepPlan {
  /// Plan ID (content hash)
  pub id: PlanId,

  /// Commands to execute (in order)
  pub commands: Vec<PlannedCommand>,
}

impl StepPlan {
  /// Build the plan from configuration: uploads first, then release
  /// creation and commit linking if a release version is configured
  pub fn build(cfg: &StepConfig) -> StepResult<Self> {
    let mut commands = Vec::new();

    for invocation in select_uploads(cfg)? {
      commands.push(PlannedCommand {
        summary: upload_progress_line(&invocation),
        program: SENTRY_CLI.to_string(),
        args: redact_token(build_upload_args(cfg, &invocation)),
      });
    }

    if cfg.has_release() {
      commands.push(PlannedCommand {
        summary: release_progress_line(cfg),
        program: SENTRY_CLI.to_string(),
        args: redact_token(build_release_args(cfg)),
      });
      commands.push(PlannedCommand {
        summary: link_progress_line(cfg),
        program: SENTRY_CLI.to_string(),
        args: redact_token(build_link_args(cfg)),
      });
    }

    let json = serde_json::to_vec(&commands).unwrap_or_default();
    Ok(Self {
      id: PlanId::from_contents(&json),
      commands,
    })
  }

  /// Serialize to JSON
  pub fn to_json(&self) -> StepResult<String> {
    use crate::core::error::ResultExt;
    serde_json::to_string_pretty(self).context("Failed to serialize plan to JSON")
  }

  /// Get human-readable representation
  pub fn to_human_readable(&self) -> String {
    let mut output = String::new();

    output.push_str(&format!("📋 Plan: sentry-symbols ({})\n", self.id));
    output.push_str(&format!("\n   Invocations ({}):\n", self.commands.len()));

    for (i, cmd) in self.commands.iter().enumerate() {
      output.push_str(&format!("   {}. {}\n", i + 1, cmd.summary));
      output.push_str(&format!("      {} {}\n", cmd.program, cmd.args.join(" ")));
    }

    output
  }
}

/// Mask the value following `--auth-token`, leaving empty values visible
fn redact_token(mut args: Vec<String>) -> Vec<String> {
  for i in 0..args.len().saturating_sub(1) {
    if args[i] == "--auth-token" && !args[i + 1].is_empty() {
      args[i + 1] = "*****".to_string();
    }
  }
  args
}
