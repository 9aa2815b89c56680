#[cfg(test)]
#[path = "file_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::models::SecretStore;

/// Secrets kept in a JSON object on disk, readable only by the current user.
pub struct FileSecretStore {
    pub file_path: PathBuf,
}

impl FileSecretStore {
    pub fn new(file_path: PathBuf) -> FileSecretStore {
        return FileSecretStore { file_path };
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.file_path.exists() {
            return Ok(BTreeMap::new());
        }

        let payload = fs::read_to_string(&self.file_path)
            .await
            .with_context(|| {
                return format!("Failed to read secrets file {}", self.file_path.display());
            })?;
        if payload.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        let secrets: BTreeMap<String, String> = serde_json::from_str(&payload)
            .with_context(|| {
                return format!("Secrets file {} is corrupt", self.file_path.display());
            })?;

        return Ok(secrets);
    }

    async fn write_all(&self, secrets: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let payload = serde_json::to_string_pretty(secrets)?;

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);
        let mut file = options.open(&self.file_path).await.with_context(|| {
            return format!("Failed to open secrets file {}", self.file_path.display());
        })?;

        // Mode only applies on create.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600)).await?;
        }

        file.write_all(payload.as_bytes()).await?;
        file.flush().await?;

        return Ok(());
    }
}

#[async_trait]
impl SecretStore for FileSecretStore {
    #[allow(clippy::implicit_return)]
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let secrets = self.read_all().await?;
        return Ok(secrets.get(key).cloned());
    }

    #[allow(clippy::implicit_return)]
    async fn store(&self, key: &str, value: &str) -> Result<()> {
        let mut secrets = self.read_all().await?;
        secrets.insert(key.to_string(), value.to_string());
        return self.write_all(&secrets).await;
    }

    #[allow(clippy::implicit_return)]
    async fn delete(&self, key: &str) -> Result<()> {
        let mut secrets = self.read_all().await?;
        if secrets.remove(key).is_none() {
            return Ok(());
        }

        return self.write_all(&secrets).await;
    }
}
