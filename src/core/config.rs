//! Step configuration
//!
//! All inputs are string-valued and come from CI environment variables
//! (Bitrise step input names) or the matching long flags. The record is
//! built once at startup and never mutated; absent variables become
//! empty strings and are passed through to sentry-cli as-is, which is
//! responsible for rejecting them.

use clap::Args;

/// Immutable step inputs, one environment variable per field
#[derive(Debug, Clone, Default, Args)]
pub struct StepConfig {
  /// Which platform's symbols to upload: "ios", "android", or "both"
  #[arg(long, env = "platform", default_value = "")]
  pub platform: String,

  /// Enables sentry-cli debug logging when set to exactly "true"
  #[arg(long, env = "is_debug_mode", default_value = "")]
  pub is_debug_mode: String,

  /// Sentry auth token
  #[arg(long, env = "auth_token", default_value = "", hide_env_values = true)]
  pub auth_token: String,

  /// Sentry server URL (for self-hosted instances; informational)
  #[arg(long, env = "sentry_url", default_value = "")]
  pub sentry_url: String,

  /// Sentry organization slug
  #[arg(long, env = "org_slug", default_value = "")]
  pub org_slug: String,

  /// Sentry project slug
  #[arg(long, env = "project_slug", default_value = "")]
  pub project_slug: String,

  /// Path to the dSYM bundle to upload
  #[arg(long, env = "dsym_path", default_value = "")]
  pub dsym_path: String,

  /// Path to the Proguard mapping file to upload
  #[arg(long, env = "proguard_mapping_path", default_value = "")]
  pub proguard_mapping_path: String,

  /// Release version to create and finalize (empty = skip release tracking)
  #[arg(long, env = "release_version", default_value = "")]
  pub release_version: String,

  /// Commits to link to the release, service-defined format
  /// (empty = automatic commit detection)
  #[arg(long, env = "associated_commits", default_value = "")]
  pub associated_commits: String,
}

impl StepConfig {
  /// Whether debug logging is enabled
  ///
  /// String equality with "true" exactly; "TRUE", "1" etc. do not enable it.
  pub fn is_debug(&self) -> bool {
    self.is_debug_mode == "true"
  }

  /// Whether release tracking is configured
  pub fn has_release(&self) -> bool {
    !self.release_version.is_empty()
  }

  /// Print a redacted configuration summary for the CI log
  pub fn print_summary(&self) {
    println!("Configuration:");
    println!("- platform: {}", self.platform);
    println!("- is_debug_mode: {}", self.is_debug_mode);
    println!("- auth_token: {}", mask(&self.auth_token));
    println!("- sentry_url: {}", self.sentry_url);
    println!("- org_slug: {}", self.org_slug);
    println!("- project_slug: {}", self.project_slug);
    println!("- dsym_path: {}", self.dsym_path);
    println!("- proguard_mapping_path: {}", self.proguard_mapping_path);
    println!("- release_version: {}", self.release_version);
    println!("- associated_commits: {}", self.associated_commits);
  }
}

/// Mask a secret for log output, keeping empty values visible as empty
fn mask(secret: &str) -> &'static str {
  if secret.is_empty() { "" } else { "*****" }
}
