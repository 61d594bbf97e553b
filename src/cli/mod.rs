//! Command Line Interface (CLI) layer for aestishot.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that merges presets with flags and
//! hands the resulting options to the library.
//!
//! If you are embedding aestishot into another application, prefer using
//! the high-level `aestishot::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::{CliArgs, normalize_legacy_flags};
pub use runner::run;
