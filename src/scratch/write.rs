// src/scratch/write.rs

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::errors::{Result, ScrapeOpsError};

/// Handle to a state-file write that is already in flight.
///
/// The write starts as soon as the handle is created. Awaiting
/// [`PendingWrite::wait`] surfaces its outcome; dropping the handle detaches
/// the write, in which case a failure is only logged.
#[derive(Debug)]
#[must_use = "drop the handle explicitly to detach the write"]
pub struct PendingWrite {
    path: PathBuf,
    handle: JoinHandle<Result<()>>,
}

impl PendingWrite {
    /// Spawn a whole-file overwrite of `path` on the current Tokio runtime.
    pub(crate) fn spawn(path: PathBuf, contents: Vec<u8>) -> Self {
        let task_path = path.clone();
        let handle = tokio::spawn(async move {
            match fs::write(&task_path, &contents).await {
                Ok(()) => {
                    debug!(
                        path = %task_path.display(),
                        bytes = contents.len(),
                        "state file written"
                    );
                    Ok(())
                }
                Err(e) => {
                    warn!(path = %task_path.display(), error = %e, "state file write failed");
                    Err(ScrapeOpsError::Io(e))
                }
            }
        });

        Self { path, handle }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Wait for the write to settle.
    pub async fn wait(self) -> Result<()> {
        match self.handle.await {
            Ok(res) => res,
            Err(join_err) => Err(ScrapeOpsError::WriteAborted {
                path: self.path,
                reason: join_err.to_string(),
            }),
        }
    }
}
