// tests/audit_log.rs

mod common;
use crate::common::{settings_in, RecordingRunner};

use std::error::Error;
use std::path::Path;

use scrapeops::support::on_error;
use scrapeops::transfer::CollectionTransfer;
use scrapeops_test_utils::{EventCapture, RECORDED_INVOCATION};
use tracing::Level;

type TestResult = Result<(), Box<dyn Error>>;

fn recording_transfer(root: &Path) -> CollectionTransfer<RecordingRunner> {
    CollectionTransfer::from_settings(RecordingRunner::new(), &settings_in(root))
}

#[tokio::test]
async fn export_is_logged_before_the_command_runs() -> TestResult {
    let capture = EventCapture::new();
    let _guard = capture.install();

    let root = tempfile::tempdir()?;
    let transfer = recording_transfer(root.path());

    transfer.export_collection("movie").await?;

    let json_file = root.path().join("tmp").join("movies.json");
    let expected = format!(
        "Exporting collection: 'movies', to: '{}'",
        json_file.display()
    );
    let logged = capture.position(&expected).expect("export intent logged");
    let ran = capture.position(RECORDED_INVOCATION).expect("runner invoked");
    assert!(logged < ran, "events: {:?}", capture.messages());
    assert_eq!(capture.events()[logged].level, Level::INFO);
    Ok(())
}

#[tokio::test]
async fn import_is_logged_before_the_command_runs() -> TestResult {
    let capture = EventCapture::new();
    let _guard = capture.install();

    let root = tempfile::tempdir()?;
    let dump = root.path().join("shows.json");
    std::fs::write(&dump, "{}")?;
    let transfer = recording_transfer(root.path());

    transfer.import_collection("show", &dump).await?;

    let expected = format!("Importing collection: 'show', from: '{}'", dump.display());
    let logged = capture.position(&expected).expect("import intent logged");
    let ran = capture.position(RECORDED_INVOCATION).expect("runner invoked");
    assert!(logged < ran, "events: {:?}", capture.messages());
    Ok(())
}

#[tokio::test]
async fn missing_import_file_logs_no_intent() -> TestResult {
    let capture = EventCapture::new();
    let _guard = capture.install();

    let root = tempfile::tempdir()?;
    let transfer = recording_transfer(root.path());

    assert!(transfer.import_collection("show", "absent.json").await.is_err());

    assert_eq!(capture.position("Importing collection"), None);
    assert_eq!(capture.position(RECORDED_INVOCATION), None);
    Ok(())
}

#[test]
fn on_error_emits_an_error_event_with_the_message() {
    let capture = EventCapture::new();
    let _guard = capture.install();

    let err = on_error("x");

    let events = capture.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::ERROR);
    assert_eq!(events[0].message, "x");
    assert_eq!(err.to_string(), "x");
}
