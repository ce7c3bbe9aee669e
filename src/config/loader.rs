// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::Settings;
use crate::config::validate::validate_settings;
use crate::errors::Result;

/// Load settings from a given path without semantic validation.
///
/// Use [`load_and_validate`] for the checked version.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let settings: Settings = toml::from_str(&contents)?;

    Ok(settings)
}

/// Load settings from path and validate them.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks that names handed to external tools are non-empty and that the
///   state-file names are bare, distinct file names.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Settings> {
    let settings = load_from_path(&path)?;
    validate_settings(&settings)?;
    Ok(settings)
}

/// Like [`load_and_validate`], but a missing file yields the built-in
/// defaults instead of an error.
///
/// Used for the default config path, which is allowed to be absent.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    if !path.exists() {
        let settings = Settings::default();
        validate_settings(&settings)?;
        return Ok(settings);
    }
    load_and_validate(path)
}

/// Default config path: `ScrapeOps.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("ScrapeOps.toml")
}
