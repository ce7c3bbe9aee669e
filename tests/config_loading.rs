// tests/config_loading.rs

use std::io::Write;
use std::path::PathBuf;

use scrapeops::config::{load_and_validate, load_or_default};
use scrapeops::errors::ScrapeOpsError;
use scrapeops::scratch::ScratchSpace;
use tempfile::NamedTempFile;

#[test]
fn full_settings_file_is_loaded() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
package_name = "popcorn"

[database]
name = "popcorn-db"
export_tool = "/opt/mongo/bin/mongoexport"

[scratch]
dir = "/var/tmp/popcorn"
status_file = "state.json"
updated_file = "last.json"

[process]
working_dir = "/srv/popcorn"
"#
    )
    .unwrap();

    let settings = load_and_validate(file.path()).unwrap();

    assert_eq!(settings.database.name, "popcorn-db");
    assert_eq!(settings.database.export_tool, "/opt/mongo/bin/mongoexport");
    assert_eq!(settings.database.import_tool, "mongoimport");
    assert_eq!(settings.working_dir(), PathBuf::from("/srv/popcorn"));

    let space = ScratchSpace::from_settings(&settings);
    assert_eq!(space.status_path(), PathBuf::from("/var/tmp/popcorn/state.json"));
    assert_eq!(space.updated_path(), PathBuf::from("/var/tmp/popcorn/last.json"));
    assert_eq!(space.log_path(), PathBuf::from("/var/tmp/popcorn/popcorn.log"));
}

#[test]
fn nested_state_file_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[scratch]
status_file = "../status.json"
"#
    )
    .unwrap();

    match load_and_validate(file.path()) {
        Err(ScrapeOpsError::Config(msg)) => {
            assert!(msg.contains("status_file"));
            assert!(msg.contains("bare file name"));
        }
        Err(e) => panic!("Expected Config error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn malformed_toml_returns_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[database\nname = ").unwrap();

    assert!(matches!(
        load_and_validate(file.path()),
        Err(ScrapeOpsError::Toml(_))
    ));
}

#[test]
fn missing_explicit_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_and_validate(dir.path().join("ScrapeOps.toml")),
        Err(ScrapeOpsError::Io(_))
    ));
}

#[test]
fn missing_default_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = load_or_default(dir.path().join("ScrapeOps.toml")).unwrap();
    assert_eq!(settings.database.name, "popcorn-api");
    assert_eq!(settings.scratch.status_file, "status.json");
}
