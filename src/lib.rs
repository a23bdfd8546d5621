//! backfill - backdated commit sequence generator
//!
//! Creates a run of commits with synthetic, increasing timestamps against a
//! local git repository and pushes each one.
//!
//! This library provides:
//! - [`generator`]: The commit sequence loop
//! - [`git`]: git command execution
//! - [`config`]: Settings file and input validation
//! - [`model`]: Domain models
//! - [`worker`]: Running a sequence on a background thread
//! - [`console`]: Prompt-driven control surface
//! - [`app`], [`ui`], [`keys`]: Terminal form

pub mod app;
pub mod config;
pub mod console;
pub mod generator;
pub mod git;
pub mod keys;
pub mod logging;
pub mod model;
pub mod reachability;
pub mod reporter;
pub mod run_log;
pub mod ui;
pub mod worker;
