use anyhow::Result;

use super::CredentialStore;
use super::TOKEN_KEY;
use super::USERNAME_KEY;
use crate::domain::models::Credential;
use crate::domain::models::DevexyError;
use crate::infrastructure::secrets::memory::MemorySecretStore;

fn store() -> (CredentialStore, MemorySecretStore) {
    let secrets = MemorySecretStore::default();
    return (CredentialStore::new(Box::new(secrets.clone())), secrets);
}

#[tokio::test]
async fn it_starts_logged_out() -> Result<()> {
    let (credentials, _secrets) = store();
    assert!(!credentials.is_logged_in().await?);
    assert_eq!(credentials.get().await?, None);
    assert_eq!(credentials.credential().await?, None);

    return Ok(());
}

#[tokio::test]
async fn it_stores_token_and_username() -> Result<()> {
    let (credentials, secrets) = store();
    credentials.store("abc", Some("alice")).await?;

    assert!(credentials.is_logged_in().await?);
    assert_eq!(
        credentials.credential().await?,
        Some(Credential {
            token: "abc".to_string(),
            username: Some("alice".to_string()),
        })
    );
    assert_eq!(
        secrets.values.get(TOKEN_KEY).map(|e| return e.to_string()),
        Some("abc".to_string())
    );

    return Ok(());
}

#[tokio::test]
async fn it_drops_stale_username() -> Result<()> {
    let (credentials, secrets) = store();
    credentials.store("abc", Some("alice")).await?;
    credentials.store("def", None).await?;

    assert_eq!(credentials.token().await?, "def");
    assert_eq!(credentials.username().await?, None);
    assert!(!secrets.values.contains_key(USERNAME_KEY));

    return Ok(());
}

#[tokio::test]
async fn it_treats_empty_token_as_logged_out() -> Result<()> {
    let (credentials, _secrets) = store();
    credentials.store("", Some("alice")).await?;

    assert!(!credentials.is_logged_in().await?);

    return Ok(());
}

#[tokio::test]
async fn it_clears_idempotently() -> Result<()> {
    let (credentials, _secrets) = store();
    credentials.store("abc", Some("alice")).await?;
    credentials.clear().await?;
    credentials.clear().await?;

    assert!(!credentials.is_logged_in().await?);
    assert_eq!(credentials.username().await?, None);

    return Ok(());
}

#[tokio::test]
async fn it_fails_token_lookup_with_auth_error() -> Result<()> {
    let (credentials, _secrets) = store();
    let err = credentials.token().await.unwrap_err();

    assert_eq!(
        err.downcast_ref::<DevexyError>(),
        Some(&DevexyError::not_logged_in())
    );

    return Ok(());
}

#[tokio::test]
async fn it_propagates_storage_failures() -> Result<()> {
    let credentials = CredentialStore::new(Box::new(MemorySecretStore::failing()));
    assert!(credentials.store("abc", None).await.is_err());
    assert!(credentials.is_logged_in().await.is_err());

    return Ok(());
}
