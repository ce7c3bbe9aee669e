// src/exec/runner.rs

//! Pluggable command runner abstraction.
//!
//! [`crate::transfer::CollectionTransfer`] talks to a `CommandRunner` rather
//! than spawning processes itself, so tests can swap in a fake that records
//! command lines instead of running database tools.
//!
//! - `ShellRunner` is the production implementation: one child process per
//!   call, run through the platform shell.
//! - Concurrent calls are independent processes with no shared state.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{Result, ScrapeOpsError};
use crate::exec::invocation::{collapse_newlines, CommandInvocation};

/// Trait abstracting how a command invocation is executed.
pub trait CommandRunner: Send + Sync {
    /// Run the invocation to completion.
    ///
    /// Resolves with stdout, newlines removed. Fails on spawn errors,
    /// non-zero exit and signal termination. No retry.
    fn run<'a>(
        &'a self,
        invocation: &'a CommandInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}

/// Runs commands through `sh -c` (or `cmd /C` on Windows).
#[derive(Debug, Clone)]
pub struct ShellRunner {
    working_dir: PathBuf,
}

impl ShellRunner {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Execute `command` in this runner's working directory.
    pub async fn execute(&self, command: &str) -> Result<String> {
        let invocation = CommandInvocation::new(command, &self.working_dir);
        self.run(&invocation).await
    }
}

impl CommandRunner for ShellRunner {
    fn run<'a>(
        &'a self,
        invocation: &'a CommandInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(run_shell(invocation))
    }
}

fn shell_command(command_line: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command_line);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command_line);
        c
    }
}

async fn run_shell(invocation: &CommandInvocation) -> Result<String> {
    debug!(
        cmd = %invocation.command(),
        cwd = %invocation.working_dir().display(),
        "spawning command"
    );

    let mut cmd = shell_command(invocation.command());
    cmd.current_dir(invocation.working_dir())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = cmd.output().await.map_err(|source| ScrapeOpsError::Spawn {
        command: invocation.command().to_string(),
        source,
    })?;

    let code = output.status.code();
    info!(
        cmd = %invocation.command(),
        exit_code = code.unwrap_or(-1),
        success = output.status.success(),
        "command exited"
    );

    if !output.status.success() {
        return Err(ScrapeOpsError::CommandFailed {
            command: invocation.command().to_string(),
            code,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(collapse_newlines(&String::from_utf8_lossy(&output.stdout)))
}
