use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use scrapeops::errors::{Result, ScrapeOpsError};
use scrapeops::exec::{CommandInvocation, CommandRunner};

/// Message of the event emitted each time the runner records an invocation,
/// so log-ordering tests can see where the "spawn" happened.
pub const RECORDED_INVOCATION: &str = "recorded invocation";

/// A fake runner that:
/// - records every invocation it is asked to run
/// - answers with a canned stdout, or a canned failure when configured to.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    invocations: Arc<Mutex<Vec<CommandInvocation>>>,
    output: String,
    fail_with_code: Option<i32>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, output: &str) -> Self {
        self.output = output.to_string();
        self
    }

    pub fn failing(mut self, code: i32) -> Self {
        self.fail_with_code = Some(code);
        self
    }

    pub fn invocations(&self) -> Vec<CommandInvocation> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.invocations()
            .iter()
            .map(|inv| inv.command().to_string())
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run<'a>(
        &'a self,
        invocation: &'a CommandInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        let invocations = Arc::clone(&self.invocations);

        Box::pin(async move {
            {
                let mut guard = invocations.lock().unwrap();
                guard.push(invocation.clone());
            }
            tracing::info!(cmd = %invocation.command(), "{}", RECORDED_INVOCATION);

            match self.fail_with_code {
                Some(code) => Err(ScrapeOpsError::CommandFailed {
                    command: invocation.command().to_string(),
                    code: Some(code),
                    stderr: "recording runner failure".to_string(),
                }),
                None => Ok(self.output.clone()),
            }
        })
    }
}
