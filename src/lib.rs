// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod scratch;
pub mod support;
pub mod transfer;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::{CliArgs, Command};
use crate::config::Settings;
use crate::exec::ShellRunner;
use crate::scratch::ScratchSpace;
use crate::transfer::CollectionTransfer;

/// Resolve settings for the given CLI arguments.
///
/// An explicit `--config` must exist; the default path may be absent.
pub fn load_settings(args: &CliArgs) -> Result<Settings> {
    let settings = match &args.config {
        Some(path) => config::load_and_validate(path)
            .with_context(|| format!("loading settings from {:?}", path))?,
        None => {
            let path = config::default_config_path();
            config::load_or_default(&path)
                .with_context(|| format!("loading settings from {:?}", path))?
        }
    };
    Ok(settings)
}

/// High-level entry point used by `main.rs`.
///
/// Wires the settings into a `ScratchSpace` and a `CollectionTransfer`
/// backed by the real shell runner, then performs one subcommand. Command
/// output goes to stdout; logs go to stderr.
pub async fn run(args: CliArgs, settings: Settings) -> Result<()> {
    let scratch = ScratchSpace::from_settings(&settings);

    match args.command {
        Command::Reset => {
            scratch
                .create_temp()
                .await
                .with_context(|| format!("resetting scratch dir {:?}", scratch.path()))?;
            scratch.reset_log().await?;
        }

        Command::Status { label } => {
            let pending = match label {
                Some(label) => scratch.set_status(label),
                None => scratch.reset_status(),
            };
            pending.wait().await?;
        }

        Command::Touch { at } => {
            let pending = match at {
                Some(epoch) => scratch.set_last_updated(epoch),
                None => scratch.touch_last_updated(),
            };
            pending.wait().await?;
        }

        Command::Show => {
            match scratch.read_status().await? {
                Some(record) => println!("status: {}", record.status),
                None => println!("status: unset"),
            }
            match scratch.read_last_updated().await? {
                Some(record) => println!("updated: {}", record.updated),
                None => println!("updated: unset"),
            }
        }

        Command::Export { collection } => {
            let transfer = transfer_for(&settings);
            let output = transfer.export_collection(&collection).await?;
            println!("{output}");
        }

        Command::Import { collection, file } => {
            let transfer = transfer_for(&settings);
            let output = transfer.import_collection(&collection, &file).await?;
            println!("{output}");
        }
    }

    debug!("command complete");
    Ok(())
}

fn transfer_for(settings: &Settings) -> CollectionTransfer<ShellRunner> {
    let runner = ShellRunner::new(settings.working_dir());
    CollectionTransfer::from_settings(runner, settings)
}
