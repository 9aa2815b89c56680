use anyhow::Result;
use async_trait::async_trait;

/// Host secret storage. Keys are namespaced by the caller.
#[async_trait]
pub trait SecretStore {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites any existing value.
    async fn store(&self, key: &str, value: &str) -> Result<()>;

    /// Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}

pub type SecretStoreBox = Box<dyn SecretStore + Send + Sync>;
