use anyhow::Result;
use tempfile::TempDir;

use super::log_writer;

#[test]
fn it_flushes_buffered_log_lines_when_the_guard_drops() -> Result<()> {
    let tmp_dir = TempDir::new()?;
    let log_path = tmp_dir.path().join("logs/debug.log");

    let (writer, guard) = log_writer(&log_path);
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(panel = "coverage", "last line before exit");
    });
    drop(guard);

    let content = std::fs::read_to_string(log_path)?;
    assert!(content.contains("last line before exit"));

    return Ok(());
}
