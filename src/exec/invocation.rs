// src/exec/invocation.rs

use std::fmt;
use std::path::{Path, PathBuf};

/// One external process run: a shell command line and the directory it runs
/// in. Lives only as long as the execution it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    command: String,
    working_dir: PathBuf,
}

impl CommandInvocation {
    pub fn new(command: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            working_dir: working_dir.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command)
    }
}

/// Collapse command output into a single line by dropping every `\n`.
///
/// Multi-line output is concatenated, so `"a\nb\n"` becomes `"ab"`.
pub fn collapse_newlines(output: &str) -> String {
    output.split('\n').collect()
}
