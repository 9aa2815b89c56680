use std::sync::Arc;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::models::SecretStore;

/// In-memory secrets for tests. `failing` makes every call error, to exercise
/// storage failures.
#[derive(Clone, Default)]
pub struct MemorySecretStore {
    pub values: Arc<DashMap<String, String>>,
    pub failing: bool,
}

impl MemorySecretStore {
    pub fn failing() -> MemorySecretStore {
        return MemorySecretStore {
            values: Arc::new(DashMap::new()),
            failing: true,
        };
    }
}

#[async_trait]
impl SecretStore for MemorySecretStore {
    #[allow(clippy::implicit_return)]
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.failing {
            bail!("secret storage unavailable");
        }
        return Ok(self.values.get(key).map(|val| return val.to_string()));
    }

    #[allow(clippy::implicit_return)]
    async fn store(&self, key: &str, value: &str) -> Result<()> {
        if self.failing {
            bail!("secret storage unavailable");
        }
        self.values.insert(key.to_string(), value.to_string());
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn delete(&self, key: &str) -> Result<()> {
        if self.failing {
            bail!("secret storage unavailable");
        }
        self.values.remove(key);
        return Ok(());
    }
}
