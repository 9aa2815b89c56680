#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;

use anyhow::Result;

use crate::domain::models::Credential;
use crate::domain::models::DevexyError;
use crate::domain::models::SecretStoreBox;

pub const TOKEN_KEY: &str = "devexy.token";
pub const USERNAME_KEY: &str = "devexy.username";

/// The single login of this installation, kept in host secret storage.
pub struct CredentialStore {
    secrets: SecretStoreBox,
}

impl CredentialStore {
    pub fn new(secrets: SecretStoreBox) -> CredentialStore {
        return CredentialStore { secrets };
    }

    /// Replaces any previous login. A login without a username clears the
    /// stale one so it never outlives its token.
    pub async fn store(&self, token: &str, username: Option<&str>) -> Result<()> {
        self.secrets.store(TOKEN_KEY, token).await?;
        match username {
            Some(username) => self.secrets.store(USERNAME_KEY, username).await?,
            None => self.secrets.delete(USERNAME_KEY).await?,
        }

        tracing::debug!(username = ?username, "stored credential");
        return Ok(());
    }

    pub async fn get(&self) -> Result<Option<String>> {
        let token = self.secrets.get(TOKEN_KEY).await?;
        return Ok(token.filter(|token| return !token.is_empty()));
    }

    pub async fn username(&self) -> Result<Option<String>> {
        return self.secrets.get(USERNAME_KEY).await;
    }

    pub async fn credential(&self) -> Result<Option<Credential>> {
        let token = match self.get().await? {
            Some(token) => token,
            None => return Ok(None),
        };

        return Ok(Some(Credential {
            token,
            username: self.username().await?,
        }));
    }

    /// The token every authenticated request needs.
    pub async fn token(&self) -> Result<String> {
        match self.get().await? {
            Some(token) => return Ok(token),
            None => return Err(DevexyError::not_logged_in().into()),
        }
    }

    pub async fn clear(&self) -> Result<()> {
        self.secrets.delete(TOKEN_KEY).await?;
        self.secrets.delete(USERNAME_KEY).await?;
        tracing::debug!("cleared credential");
        return Ok(());
    }

    pub async fn is_logged_in(&self) -> Result<bool> {
        return Ok(self.get().await?.is_some());
    }
}
