// src/scratch/records.rs

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Status label used when nothing is running.
pub const IDLE: &str = "Idle";

/// Contents of the status file: `{"status": "<label>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub status: String,
}

impl StatusRecord {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

impl Default for StatusRecord {
    fn default() -> Self {
        Self::new(IDLE)
    }
}

/// Contents of the last-updated file: `{"updated": <epoch seconds>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedRecord {
    pub updated: i64,
}

impl UpdatedRecord {
    pub fn at(updated: i64) -> Self {
        Self { updated }
    }
}

pub fn now_epoch_seconds() -> i64 {
    Utc::now().timestamp()
}
