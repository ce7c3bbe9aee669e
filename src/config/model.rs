// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings as read from a TOML file.
///
/// ```toml
/// package_name = "scrapeops"
///
/// [database]
/// name = "popcorn-api"
///
/// [scratch]
/// dir = "tmp"
/// status_file = "status.json"
/// updated_file = "updated.json"
///
/// [process]
/// working_dir = "/srv/scrapeops"
/// ```
///
/// All sections are optional and have reasonable defaults. Every component
/// receives the pieces it needs at construction; nothing here is global.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Product name; the log file in the scratch directory is
    /// `<package_name>.log`.
    #[serde(default = "default_package_name")]
    pub package_name: String,

    #[serde(default)]
    pub database: DatabaseSection,

    #[serde(default)]
    pub scratch: ScratchSection,

    #[serde(default)]
    pub process: ProcessSection,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            package_name: default_package_name(),
            database: DatabaseSection::default(),
            scratch: ScratchSection::default(),
            process: ProcessSection::default(),
        }
    }
}

fn default_package_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

/// `[database]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSection {
    /// Database the export/import tools are pointed at (`-d <name>`).
    #[serde(default = "default_database_name")]
    pub name: String,

    #[serde(default = "default_export_tool")]
    pub export_tool: String,

    #[serde(default = "default_import_tool")]
    pub import_tool: String,
}

fn default_database_name() -> String {
    "popcorn-api".to_string()
}

fn default_export_tool() -> String {
    "mongoexport".to_string()
}

fn default_import_tool() -> String {
    "mongoimport".to_string()
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            name: default_database_name(),
            export_tool: default_export_tool(),
            import_tool: default_import_tool(),
        }
    }
}

/// `[scratch]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ScratchSection {
    /// Scratch directory. Relative paths are taken as-is, i.e. relative to
    /// the process working directory at the time of use.
    #[serde(default = "default_scratch_dir")]
    pub dir: PathBuf,

    /// Bare file name of the status record inside `dir`.
    #[serde(default = "default_status_file")]
    pub status_file: String,

    /// Bare file name of the last-updated record inside `dir`.
    #[serde(default = "default_updated_file")]
    pub updated_file: String,
}

fn default_scratch_dir() -> PathBuf {
    PathBuf::from("tmp")
}

fn default_status_file() -> String {
    "status.json".to_string()
}

fn default_updated_file() -> String {
    "updated.json".to_string()
}

impl Default for ScratchSection {
    fn default() -> Self {
        Self {
            dir: default_scratch_dir(),
            status_file: default_status_file(),
            updated_file: default_updated_file(),
        }
    }
}

/// `[process]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProcessSection {
    /// Working directory for external commands.
    ///
    /// If `None`, [`Settings::working_dir`] falls back to the current
    /// directory of this process.
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

impl Settings {
    /// Effective working directory for external commands.
    pub fn working_dir(&self) -> PathBuf {
        match &self.process.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// File name of the log file kept in the scratch directory.
    pub fn log_file_name(&self) -> String {
        format!("{}.log", self.package_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.database.name, "popcorn-api");
        assert_eq!(settings.database.export_tool, "mongoexport");
        assert_eq!(settings.scratch.dir, PathBuf::from("tmp"));
        assert_eq!(settings.scratch.status_file, "status.json");
        assert_eq!(settings.scratch.updated_file, "updated.json");
        assert_eq!(settings.log_file_name(), "scrapeops.log");
        assert!(settings.process.working_dir.is_none());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let settings: Settings = toml::from_str(
            r#"
package_name = "popcorn"

[database]
name = "movies-db"
"#,
        )
        .unwrap();
        assert_eq!(settings.database.name, "movies-db");
        assert_eq!(settings.database.import_tool, "mongoimport");
        assert_eq!(settings.log_file_name(), "popcorn.log");
    }

    #[test]
    fn explicit_working_dir_wins() {
        let settings: Settings = toml::from_str(
            r#"
[process]
working_dir = "/srv/scrape"
"#,
        )
        .unwrap();
        assert_eq!(settings.working_dir(), PathBuf::from("/srv/scrape"));
    }
}
