#![allow(dead_code)]

use std::path::Path;

use scrapeops::config::{validate_settings, Settings};

/// Builder for `Settings` to simplify test setup.
///
/// Starts from the built-in defaults; tests normally point the scratch
/// directory and the working directory at a `TempDir`.
pub struct SettingsBuilder {
    settings: Settings,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
        }
    }

    pub fn with_scratch_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.settings.scratch.dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.settings.process.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn with_database(mut self, name: &str) -> Self {
        self.settings.database.name = name.to_string();
        self
    }

    pub fn with_tools(mut self, export_tool: &str, import_tool: &str) -> Self {
        self.settings.database.export_tool = export_tool.to_string();
        self.settings.database.import_tool = import_tool.to_string();
        self
    }

    pub fn with_package_name(mut self, name: &str) -> Self {
        self.settings.package_name = name.to_string();
        self
    }

    pub fn build(self) -> Settings {
        validate_settings(&self.settings).expect("Failed to build valid settings from builder");
        self.settings
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
