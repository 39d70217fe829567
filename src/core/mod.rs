//! Core engine for the sentry-symbols step
//!
//! - **config**: immutable step inputs read from CI environment variables
//! - **driver**: fail-fast sequencing of the planned invocations
//! - **error**: error types with exit codes and operator-facing printing
//! - **plan**: pure invocation planning (which sentry-cli calls, which args)
//! - **runner**: process execution seam (production impl + test double)

pub mod config;
pub mod driver;
pub mod error;
pub mod plan;
pub mod runner;
