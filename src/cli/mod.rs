//! Command Line Interface (CLI) layer for the caesar tool.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the literal, stdin, and file
//! flows. It wires user-provided options to the underlying library
//! functionality exposed via `caesar::api`.
//!
//! If you are embedding the cipher into another application, prefer using
//! the high-level `caesar::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
