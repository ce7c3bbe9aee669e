// src/config/validate.rs

use std::path::{Component, Path};

use crate::config::model::Settings;
use crate::errors::{Result, ScrapeOpsError};

pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_database(settings)?;
    validate_scratch(settings)?;
    ensure_bare_file_name("package_name", &settings.package_name)?;
    Ok(())
}

fn validate_database(settings: &Settings) -> Result<()> {
    let db = &settings.database;
    for (key, value) in [
        ("name", &db.name),
        ("export_tool", &db.export_tool),
        ("import_tool", &db.import_tool),
    ] {
        if value.trim().is_empty() {
            return Err(ScrapeOpsError::Config(format!(
                "[database].{key} must not be empty"
            )));
        }
    }
    Ok(())
}

fn validate_scratch(settings: &Settings) -> Result<()> {
    let scratch = &settings.scratch;

    if scratch.dir.as_os_str().is_empty() {
        return Err(ScrapeOpsError::Config(
            "[scratch].dir must not be empty".to_string(),
        ));
    }

    ensure_bare_file_name("[scratch].status_file", &scratch.status_file)?;
    ensure_bare_file_name("[scratch].updated_file", &scratch.updated_file)?;

    if scratch.status_file == scratch.updated_file {
        return Err(ScrapeOpsError::Config(format!(
            "[scratch].status_file and [scratch].updated_file must differ (both are '{}')",
            scratch.status_file
        )));
    }

    Ok(())
}

/// A bare file name has exactly one normal path component.
fn ensure_bare_file_name(key: &str, name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => Err(ScrapeOpsError::Config(format!(
            "{key} must be a bare file name (got '{name}')"
        ))),
    }
}
