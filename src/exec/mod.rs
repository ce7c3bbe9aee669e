// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`invocation`] holds the `CommandInvocation` value and output
//!   normalisation.
//! - [`runner`] provides the `CommandRunner` trait and the production
//!   `ShellRunner`, which uses `tokio::process::Command`.

pub mod invocation;
pub mod runner;

pub use invocation::{collapse_newlines, CommandInvocation};
pub use runner::{CommandRunner, ShellRunner};
