// src/transfer/mod.rs

//! Export and import of named collections through the database CLI tools.
//!
//! Command lines are built here and handed to a [`CommandRunner`]; nothing
//! in this module spawns processes directly. Collection names are not
//! validated and end up verbatim on a shell command line.

pub mod naming;

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;

use crate::config::{DatabaseSection, Settings};
use crate::errors::{Result, ScrapeOpsError};
use crate::exec::{CommandInvocation, CommandRunner};
use crate::scratch::ScratchSpace;

pub use naming::{export_path, pluralize};

pub struct CollectionTransfer<R> {
    runner: R,
    scratch: ScratchSpace,
    database: DatabaseSection,
    working_dir: PathBuf,
}

impl<R: CommandRunner> CollectionTransfer<R> {
    pub fn new(
        runner: R,
        scratch: ScratchSpace,
        database: DatabaseSection,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            runner,
            scratch,
            database,
            working_dir: working_dir.into(),
        }
    }

    pub fn from_settings(runner: R, settings: &Settings) -> Self {
        Self::new(
            runner,
            ScratchSpace::from_settings(settings),
            settings.database.clone(),
            settings.working_dir(),
        )
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// `<export_tool> -d <db> -c <collection>s -o '<scratch>/<collection>s.json'`
    pub fn export_command(&self, collection: &str) -> CommandInvocation {
        let json_file = export_path(self.scratch.path(), collection);
        let cmd = format!(
            "{} -d {} -c {} -o '{}'",
            self.database.export_tool,
            self.database.name,
            pluralize(collection),
            json_file.display()
        );
        CommandInvocation::new(cmd, &self.working_dir)
    }

    /// `<import_tool> -d <db> -c <collection>s --file '<json_file>' --upsert`
    pub fn import_command(&self, collection: &str, json_file: &Path) -> CommandInvocation {
        let cmd = format!(
            "{} -d {} -c {} --file '{}' --upsert",
            self.database.import_tool,
            self.database.name,
            pluralize(collection),
            json_file.display()
        );
        CommandInvocation::new(cmd, &self.working_dir)
    }

    /// Export `collection` to `<scratch>/<collection>s.json`.
    ///
    /// Resolves with the tool's stdout (newlines removed).
    pub async fn export_collection(&self, collection: &str) -> Result<String> {
        let json_file = export_path(self.scratch.path(), collection);
        info!(
            collection = %collection,
            "Exporting collection: '{}', to: '{}'",
            pluralize(collection),
            json_file.display()
        );

        let invocation = self.export_command(collection);
        self.runner.run(&invocation).await
    }

    /// Import `json_file` into `collection` with upsert semantics.
    ///
    /// A relative `json_file` is resolved against the current directory of
    /// this process, not the runner's working directory. A missing file
    /// fails before anything is spawned.
    pub async fn import_collection(
        &self,
        collection: &str,
        json_file: impl AsRef<Path>,
    ) -> Result<String> {
        let cwd = std::env::current_dir()?;
        let json_file = naming::resolve_against(&cwd, json_file.as_ref());

        if !fs::try_exists(&json_file).await? {
            return Err(ScrapeOpsError::MissingImportFile(json_file));
        }

        info!(
            collection = %collection,
            "Importing collection: '{}', from: '{}'",
            collection,
            json_file.display()
        );

        let invocation = self.import_command(collection, &json_file);
        self.runner.run(&invocation).await
    }
}
