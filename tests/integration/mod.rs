//! Integration tests for sentry-symbols
//!
//! These run the real binary against a stub `sentry-cli` script placed on
//! PATH, so the full CLI surface, exit codes, and invocation sequencing are
//! exercised without any network or real Sentry account.

#![cfg(unix)]

mod test_plan;
mod test_run;
