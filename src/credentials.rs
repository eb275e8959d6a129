use std::sync::RwLock;

use async_trait::async_trait;

use crate::constants::API_KEY_ENV_VARS;
use crate::error::CredentialError;

/// Host-side owner of the Gemini API key.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Checked once at startup to decide whether to ask for a key.
    async fn has_credential(&self) -> bool;

    /// Lets the user pick a key. Success is assumed once this returns `Ok`.
    async fn request_credential_selection(&self) -> Result<(), CredentialError>;

    /// Key used for the next request, read fresh every time.
    fn api_key(&self) -> Option<String>;
}

/// Reads `GEMINI_API_KEY`, then `API_KEY`. Selection re-reads the environment.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider {
    selected: RwLock<Option<String>>,
}

impl EnvCredentialProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_env() -> Option<String> {
        API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
    }
}

#[async_trait]
impl CredentialProvider for EnvCredentialProvider {
    async fn has_credential(&self) -> bool {
        self.api_key().is_some()
    }

    async fn request_credential_selection(&self) -> Result<(), CredentialError> {
        let key = Self::from_env()
            .ok_or_else(|| CredentialError::Missing(API_KEY_ENV_VARS.join(" or ")))?;
        match self.selected.write() {
            Ok(mut selected) => {
                *selected = Some(key);
                tracing::info!("API key selected from environment");
                Ok(())
            }
            Err(_) => Err(CredentialError::Selection("credential store poisoned".into())),
        }
    }

    fn api_key(&self) -> Option<String> {
        self.selected
            .read()
            .ok()
            .and_then(|selected| selected.clone())
            .or_else(Self::from_env)
    }
}

/// Fixed key handed in by the host, e.g. from a settings screen.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    api_key: String,
}

impl StaticCredentialProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    async fn request_credential_selection(&self) -> Result<(), CredentialError> {
        if self.api_key.trim().is_empty() {
            return Err(CredentialError::Missing("an API key".into()));
        }
        Ok(())
    }

    fn api_key(&self) -> Option<String> {
        Some(self.api_key.trim().to_string()).filter(|key| !key.is_empty())
    }
}
