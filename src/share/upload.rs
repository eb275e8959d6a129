use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use super::platform::{FileUploader, ShareFile};
use crate::error::ShareError;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    success: bool,
    link: Option<String>,
}

/// Posts the file as multipart field `file` to a file.io style endpoint.
pub struct FileIoUploader {
    http: reqwest::Client,
    endpoint: String,
}

impl FileIoUploader {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl FileUploader for FileIoUploader {
    async fn upload(&self, file: &ShareFile) -> Result<Option<String>, ShareError> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)?;
        let form = Form::new().part("file", part);

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "upload rejected");
            return Ok(None);
        }

        let body: UploadResponse = response.json().await?;
        if !body.success {
            tracing::warn!("upload reported failure");
            return Ok(None);
        }

        Ok(body.link.filter(|link| !link.trim().is_empty()))
    }
}
