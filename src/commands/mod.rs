//! CLI commands for sentry-symbols
//!
//! - **run**: execute the step (uploads, then release tracking)
//! - **plan**: dry-run showing the planned invocations without executing

pub mod plan;
pub mod run;

pub use plan::run_plan;
pub use run::run_step;
