// src/config/mod.rs

//! Configuration loading and validation for scrapeops.
//!
//! Responsibilities:
//! - Define the TOML-backed settings model (`model.rs`).
//! - Load a settings file from disk (`loader.rs`).
//! - Validate names that end up on disk or on a command line (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_or_default};
pub use model::{DatabaseSection, ProcessSection, ScratchSection, Settings};
pub use validate::validate_settings;
