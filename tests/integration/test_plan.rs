//! Tests for the `plan` command

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_plan_executes_nothing() -> Result<()> {
  let stub = StubCli::new()?;

  let output = stub.run_binary(None, &base_inputs(), &["plan"])?;
  assert!(output.status.success());
  assert!(stub.invocations()?.is_empty());

  let out = stdout(&output);
  assert!(out.contains("Invocations (2)"));
  assert!(out.contains("upload-dif"));
  assert!(out.contains("upload-proguard"));

  Ok(())
}

#[test]
fn test_plan_json_output() -> Result<()> {
  let stub = StubCli::new()?;
  let mut inputs = base_inputs();
  inputs.push(("release_version", "1.2.3"));

  let output = stub.run_binary(None, &inputs, &["plan", "--json"])?;
  assert!(output.status.success());

  let plan: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  let commands = plan["commands"].as_array().expect("commands array");
  assert_eq!(commands.len(), 4);
  assert!(plan["id"].as_str().is_some());

  Ok(())
}

#[test]
fn test_plan_redacts_auth_token() -> Result<()> {
  let stub = StubCli::new()?;

  let output = stub.run_binary(None, &base_inputs(), &["plan", "--json"])?;
  let out = stdout(&output);
  assert!(!out.contains("token123"));
  assert!(out.contains("*****"));

  Ok(())
}

#[test]
fn test_plan_rejects_invalid_platform() -> Result<()> {
  let stub = StubCli::new()?;
  let mut inputs = base_inputs();
  inputs[0] = ("platform", "windows");

  let output = stub.run_binary(None, &inputs, &["plan"])?;
  assert_eq!(output.status.code(), Some(2));
  assert!(stub.invocations()?.is_empty());

  Ok(())
}

#[test]
fn test_plan_id_is_stable_for_identical_inputs() -> Result<()> {
  let stub = StubCli::new()?;

  let first = stub.run_binary(None, &base_inputs(), &["plan", "--json"])?;
  let second = stub.run_binary(None, &base_inputs(), &["plan", "--json"])?;

  let a: serde_json::Value = serde_json::from_str(&stdout(&first))?;
  let b: serde_json::Value = serde_json::from_str(&stdout(&second))?;
  assert_eq!(a["id"], b["id"]);

  Ok(())
}
