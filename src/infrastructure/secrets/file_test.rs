use anyhow::Result;
use tempfile::TempDir;

use super::FileSecretStore;
use crate::domain::models::SecretStore;

#[tokio::test]
async fn it_stores_and_reads_back() -> Result<()> {
    let tmp_dir = TempDir::new()?;
    let store = FileSecretStore::new(tmp_dir.path().join("nested/credentials.json"));

    assert_eq!(store.get("devexy.token").await?, None);

    store.store("devexy.token", "abc").await?;
    store.store("devexy.token", "def").await?;
    assert_eq!(store.get("devexy.token").await?, Some("def".to_string()));

    return Ok(());
}

#[tokio::test]
async fn it_deletes_idempotently() -> Result<()> {
    let tmp_dir = TempDir::new()?;
    let store = FileSecretStore::new(tmp_dir.path().join("credentials.json"));

    store.store("devexy.token", "abc").await?;
    store.store("devexy.username", "alice").await?;
    store.delete("devexy.token").await?;
    store.delete("devexy.token").await?;

    assert_eq!(store.get("devexy.token").await?, None);
    assert_eq!(store.get("devexy.username").await?, Some("alice".to_string()));

    return Ok(());
}

#[cfg(unix)]
#[tokio::test]
async fn it_restricts_file_permissions() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let tmp_dir = TempDir::new()?;
    let file_path = tmp_dir.path().join("credentials.json");
    let store = FileSecretStore::new(file_path.clone());
    store.store("devexy.token", "abc").await?;

    let mode = std::fs::metadata(file_path)?.permissions().mode();
    assert_eq!(mode & 0o777, 0o600);

    return Ok(());
}

#[cfg(unix)]
#[tokio::test]
async fn it_tightens_an_existing_readable_file() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let tmp_dir = TempDir::new()?;
    let file_path = tmp_dir.path().join("credentials.json");
    std::fs::write(&file_path, "{}")?;
    std::fs::set_permissions(&file_path, std::fs::Permissions::from_mode(0o644))?;

    let store = FileSecretStore::new(file_path.clone());
    store.store("devexy.token", "abc").await?;

    let mode = std::fs::metadata(&file_path)?.permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
    assert_eq!(store.get("devexy.token").await?, Some("abc".to_string()));

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_corrupt_file() -> Result<()> {
    let tmp_dir = TempDir::new()?;
    let file_path = tmp_dir.path().join("credentials.json");
    std::fs::write(&file_path, "{not json")?;

    let store = FileSecretStore::new(file_path);
    assert!(store.get("devexy.token").await.is_err());

    return Ok(());
}
