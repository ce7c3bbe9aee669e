#![allow(dead_code)]

use std::path::Path;

use scrapeops::config::Settings;
use scrapeops::scratch::ScratchSpace;
use tempfile::TempDir;

pub use scrapeops_test_utils::{init_tracing, with_timeout, RecordingRunner, SettingsBuilder};

/// Settings whose scratch and working directories live inside `root`.
pub fn settings_in(root: &Path) -> Settings {
    SettingsBuilder::new()
        .with_scratch_dir(root.join("tmp"))
        .with_working_dir(root)
        .with_database("popcorn-api")
        .build()
}

/// A fresh temp dir plus a `ScratchSpace` pointed at `<tmp>/tmp`.
pub fn scratch() -> (TempDir, ScratchSpace) {
    let root = tempfile::tempdir().expect("creating temp dir");
    let space = ScratchSpace::from_settings(&settings_in(root.path()));
    (root, space)
}

pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("reading dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
