use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ASPECT_RATIO, DEFAULT_GEMINI_ENDPOINT, DEFAULT_IMAGE_MODEL, DEFAULT_SHARE_RESET_DELAY_MS,
    DEFAULT_UPLOAD_ENDPOINT,
};

/// Runtime settings. Everything except the credential has a baked-in default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub gemini_endpoint: String,
    pub model: String,
    pub aspect_ratio: String,
    pub upload_endpoint: String,
    pub share_reset_delay_ms: u64,
    pub download_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            model: DEFAULT_IMAGE_MODEL.to_string(),
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
            upload_endpoint: DEFAULT_UPLOAD_ENDPOINT.to_string(),
            share_reset_delay_ms: DEFAULT_SHARE_RESET_DELAY_MS,
            download_dir: None,
        }
    }
}

impl AppConfig {
    pub fn with_gemini_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.gemini_endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_upload_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.upload_endpoint = endpoint.into();
        self
    }

    pub fn with_share_reset_delay(mut self, delay: Duration) -> Self {
        self.share_reset_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = Some(dir.into());
        self
    }

    pub fn share_reset_delay(&self) -> Duration {
        Duration::from_millis(self.share_reset_delay_ms)
    }

    /// Configured directory, else the user's download folder, else the
    /// working directory.
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
