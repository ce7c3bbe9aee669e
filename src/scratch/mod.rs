// src/scratch/mod.rs

//! Scratch directory and the two JSON state files kept in it.
//!
//! The state is exposed as files rather than in-memory values so that an
//! external reader (a status page, a shell script) can see the current
//! operation without talking to this process.
//!
//! - [`records`] defines the `{"status": ..}` / `{"updated": ..}` shapes.
//! - [`clear`] empties the directory.
//! - [`write`] provides `PendingWrite`, the handle returned by the setters.

pub mod clear;
pub mod records;
pub mod write;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tracing::{debug, info};

use crate::config::Settings;
use crate::errors::Result;

pub use records::{now_epoch_seconds, StatusRecord, UpdatedRecord, IDLE};
pub use write::PendingWrite;

/// Owner of the scratch directory.
///
/// Cheap to clone; holds paths only. The directory and its files are shared,
/// unsynchronised state: the caller is expected to drive status transitions
/// from one place. The setters spawn onto the ambient Tokio runtime and must
/// be called from within one.
#[derive(Debug, Clone)]
pub struct ScratchSpace {
    dir: PathBuf,
    status_path: PathBuf,
    updated_path: PathBuf,
    log_path: PathBuf,
}

impl ScratchSpace {
    pub fn new(
        dir: impl Into<PathBuf>,
        status_file: &str,
        updated_file: &str,
        log_file: &str,
    ) -> Self {
        let dir = dir.into();
        Self {
            status_path: dir.join(status_file),
            updated_path: dir.join(updated_file),
            log_path: dir.join(log_file),
            dir,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &settings.scratch.dir,
            &settings.scratch.status_file,
            &settings.scratch.updated_file,
            &settings.log_file_name(),
        )
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    pub fn status_path(&self) -> &Path {
        &self.status_path
    }

    pub fn updated_path(&self) -> &Path {
        &self.updated_path
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Reset the scratch directory.
    ///
    /// Creates the directory if needed, removes everything inside it
    /// (nested directories included) and leaves two zero-byte placeholders
    /// for the status and updated files. Any filesystem error is returned.
    pub async fn create_temp(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).await?;

        let removed = clear::clear_dir(&self.dir).await?;

        fs::write(&self.status_path, b"").await?;
        fs::write(&self.updated_path, b"").await?;

        info!(
            dir = %self.dir.display(),
            removed,
            "scratch directory reset"
        );
        Ok(())
    }

    /// Overwrite the status file with `{"status": <status>}`.
    pub fn set_status(&self, status: impl Into<String>) -> PendingWrite {
        let record = StatusRecord::new(status);
        debug!(status = %record.status, "setting status");
        self.write_record(&self.status_path, &record)
    }

    /// Set the status back to [`IDLE`].
    pub fn reset_status(&self) -> PendingWrite {
        self.set_status(IDLE)
    }

    /// Overwrite the updated file with `{"updated": <updated>}`.
    pub fn set_last_updated(&self, updated: i64) -> PendingWrite {
        debug!(updated, "setting last updated");
        self.write_record(&self.updated_path, &UpdatedRecord::at(updated))
    }

    /// Record the current time as the last update.
    pub fn touch_last_updated(&self) -> PendingWrite {
        self.set_last_updated(now_epoch_seconds())
    }

    /// `None` while the status file is still the empty placeholder.
    pub async fn read_status(&self) -> Result<Option<StatusRecord>> {
        read_record(&self.status_path).await
    }

    /// `None` while the updated file is still the empty placeholder.
    pub async fn read_last_updated(&self) -> Result<Option<UpdatedRecord>> {
        read_record(&self.updated_path).await
    }

    /// Delete the log file if present. Returns whether a file was removed.
    pub async fn reset_log(&self) -> Result<bool> {
        match fs::remove_file(&self.log_path).await {
            Ok(()) => {
                info!(path = %self.log_path.display(), "log file removed");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn write_record<T: Serialize>(&self, path: &Path, record: &T) -> PendingWrite {
        // Serialising a struct of a string or an integer cannot fail.
        let contents = serde_json::to_vec(record).unwrap_or_default();
        PendingWrite::spawn(path.to_path_buf(), contents)
    }
}

async fn read_record<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let bytes = fs::read(path).await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(&bytes)?))
}
