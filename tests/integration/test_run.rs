//! Tests for the `run` command

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_both_platforms_upload_in_order() -> Result<()> {
  let stub = StubCli::new()?;

  let output = stub.run_binary(None, &base_inputs(), &["run"])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let invocations = stub.invocations()?;
  assert_eq!(invocations.len(), 2);
  assert_eq!(
    invocations[0],
    "--auth-token token123 upload-dif --org my-org --project my-project ./app.dSYM.zip"
  );
  assert_eq!(
    invocations[1],
    "--auth-token token123 upload-proguard --org my-org --project my-project ./mapping.txt"
  );

  let out = stdout(&output);
  assert!(out.contains("Executing upload-dif, uploading ./app.dSYM.zip..."));
  assert!(out.contains("Executing upload-proguard, uploading ./mapping.txt..."));
  assert!(out.contains("Uploads completed"));
  assert!(out.contains("No release version declared, skipping Suspect Commit tracking..."));

  Ok(())
}

#[test]
fn test_single_platform_runs_one_upload() -> Result<()> {
  let stub = StubCli::new()?;
  let mut inputs = base_inputs();
  inputs[0] = ("platform", "android");

  let output = stub.run_binary(None, &inputs, &["run"])?;
  assert!(output.status.success());

  let invocations = stub.invocations()?;
  assert_eq!(invocations.len(), 1);
  assert!(invocations[0].contains("upload-proguard"));

  Ok(())
}

#[test]
fn test_invalid_platform_exits_without_invocations() -> Result<()> {
  let stub = StubCli::new()?;
  let mut inputs = base_inputs();
  inputs[0] = ("platform", "linux");

  let output = stub.run_binary(None, &inputs, &["run"])?;
  assert_eq!(output.status.code(), Some(2));
  assert!(stub.invocations()?.is_empty());
  assert!(stderr(&output).contains("Invalid platform 'linux'"));

  Ok(())
}

#[test]
fn test_first_failure_stops_the_sequence() -> Result<()> {
  let stub = StubCli::new()?;

  let output = stub.run_binary(Some("upload-dif"), &base_inputs(), &["run"])?;
  assert_eq!(output.status.code(), Some(1));

  // The Proguard upload must never be attempted
  let invocations = stub.invocations()?;
  assert_eq!(invocations.len(), 1);
  assert!(invocations[0].contains("upload-dif"));

  // Error message first, then the tool's own output
  let err = stderr(&output);
  assert!(err.contains("Error:"));
  assert!(err.contains("stub: simulated failure"));

  Ok(())
}

#[test]
fn test_debug_flag_appended_only_for_exact_true() -> Result<()> {
  let stub = StubCli::new()?;
  let mut inputs = base_inputs();
  inputs.push(("is_debug_mode", "true"));

  let output = stub.run_binary(None, &inputs, &["run"])?;
  assert!(output.status.success());
  for invocation in stub.invocations()? {
    assert!(
      invocation.ends_with("--log-level=debug"),
      "missing debug flag: {}",
      invocation
    );
  }

  let stub = StubCli::new()?;
  let mut inputs = base_inputs();
  inputs.push(("is_debug_mode", "TRUE"));

  let output = stub.run_binary(None, &inputs, &["run"])?;
  assert!(output.status.success());
  for invocation in stub.invocations()? {
    assert!(!invocation.contains("--log-level=debug"));
  }

  Ok(())
}

#[test]
fn test_release_tracking_with_automatic_linking() -> Result<()> {
  let stub = StubCli::new()?;
  let mut inputs = base_inputs();
  inputs.push(("release_version", "1.2.3"));

  let output = stub.run_binary(None, &inputs, &["run"])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));

  let invocations = stub.invocations()?;
  assert_eq!(invocations.len(), 4);
  assert!(invocations[2].ends_with("releases --org my-org --project my-project new --finalize 1.2.3"));
  assert!(invocations[3].ends_with("releases --org my-org --project my-project set-commits --auto 1.2.3"));

  let out = stdout(&output);
  assert!(out.contains("Executing releases command, creating and finalizing release: 1.2.3"));
  assert!(out.contains("Automatically linking commits to release: 1.2.3..."));

  Ok(())
}

#[test]
fn test_release_tracking_with_manual_linking() -> Result<()> {
  let stub = StubCli::new()?;
  let mut inputs = base_inputs();
  inputs.push(("release_version", "1.2.3"));
  inputs.push(("associated_commits", "repo@abc123"));

  let output = stub.run_binary(None, &inputs, &["run"])?;
  assert!(output.status.success());

  let invocations = stub.invocations()?;
  assert_eq!(invocations.len(), 4);
  assert!(invocations[3].contains("set-commits --commit repo@abc123 1.2.3"));

  assert!(stdout(&output).contains("Manually linking repo@abc123, to release: 1.2.3..."));

  Ok(())
}

#[test]
fn test_release_failure_skips_commit_linking() -> Result<()> {
  let stub = StubCli::new()?;
  let mut inputs = base_inputs();
  inputs.push(("release_version", "1.2.3"));

  let output = stub.run_binary(Some("--finalize"), &inputs, &["run"])?;
  assert_eq!(output.status.code(), Some(1));

  // Both uploads plus the failed release, never the set-commits call
  let invocations = stub.invocations()?;
  assert_eq!(invocations.len(), 3);
  assert!(!invocations.iter().any(|line| line.contains("set-commits")));

  Ok(())
}

#[test]
fn test_run_prints_redacted_configuration() -> Result<()> {
  let stub = StubCli::new()?;

  let output = stub.run_binary(None, &base_inputs(), &["run"])?;
  let out = stdout(&output);
  assert!(out.contains("Configuration:"));
  assert!(out.contains("- platform: both"));
  assert!(out.contains("- auth_token: *****"));
  assert!(!out.contains("token123"));

  Ok(())
}
