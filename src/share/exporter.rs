use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::platform::{probe_capabilities, CapabilityProbe, ShareData, ShareFile, SharePlatform, Sharer};
use super::status::{ShareOutcome, ShareStatus};
use crate::constants::{APP_TITLE, DEFAULT_IMAGE_MIME, FILE_NAME_PREFIX};
use crate::error::ShareError;
use crate::flight::InFlight;
use crate::image_data::decode_data_uri;

/// Shares an image through the best facility the host offers:
/// native share sheet, then an uploaded link on the clipboard, then the raw
/// image on the clipboard.
pub struct ShareExporter {
    platform: SharePlatform,
    probe: CapabilityProbe,
    status: ShareStatus,
    is_sharing: AtomicBool,
    reset_delay: Duration,
}

impl ShareExporter {
    pub fn new(platform: SharePlatform, status: ShareStatus, reset_delay: Duration) -> Self {
        Self {
            platform,
            probe: Arc::new(probe_capabilities),
            status,
            is_sharing: AtomicBool::new(false),
            reset_delay,
        }
    }

    pub fn with_probe<F>(mut self, probe: F) -> Self
    where
        F: Fn(&SharePlatform, &ShareFile) -> Sharer + Send + Sync + 'static,
    {
        self.probe = Arc::new(probe);
        self
    }

    pub fn status(&self) -> &ShareStatus {
        &self.status
    }

    pub fn is_sharing(&self) -> bool {
        self.is_sharing.load(Ordering::Acquire)
    }

    /// Shares `image` (a data URI) captioned with `text`.
    ///
    /// Returns `None` without doing anything while another share is pending.
    /// The image is decoded up front, so later changes to the current image
    /// do not affect a share in progress.
    pub async fn share(&self, image: &str, text: &str) -> Option<ShareOutcome> {
        let Some(_flight) = InFlight::try_acquire(&self.is_sharing) else {
            tracing::debug!("share already in progress, ignoring request");
            return None;
        };

        self.status.reset();

        let outcome = match self.deliver(image, text).await {
            Ok(Sharer::NativeShare) => {
                tracing::info!("image shared through native share sheet");
                self.status.set(ShareOutcome::Success);
                ShareOutcome::Success
            }
            Ok(sharer) => {
                tracing::info!(?sharer, "image copied to clipboard");
                self.status
                    .set_with_revert(ShareOutcome::Success, self.reset_delay);
                ShareOutcome::Success
            }
            Err(err) => {
                tracing::error!("Share failed: {err}");
                self.status.set(ShareOutcome::Error);
                ShareOutcome::Error
            }
        };

        Some(outcome)
    }

    /// Runs the fallback chain and reports which facility delivered.
    async fn deliver(&self, image: &str, text: &str) -> Result<Sharer, ShareError> {
        let file = share_file(image, current_epoch_millis())?;

        match (self.probe)(&self.platform, &file) {
            Sharer::NativeShare => {
                let native = self
                    .platform
                    .native()
                    .ok_or_else(|| ShareError::Native("native share is not available".into()))?;
                native
                    .share(ShareData {
                        title: APP_TITLE.to_string(),
                        text: share_caption(text),
                        files: vec![file],
                    })
                    .await?;
                Ok(Sharer::NativeShare)
            }
            Sharer::ClipboardLink => match self.platform.uploader().upload(&file).await? {
                Some(link) => {
                    self.platform.clipboard().write_text(&link).await?;
                    Ok(Sharer::ClipboardLink)
                }
                None => {
                    tracing::debug!("no share link, copying image instead");
                    self.platform.clipboard().write_image(&file).await?;
                    Ok(Sharer::ClipboardImage)
                }
            },
            Sharer::ClipboardImage => {
                self.platform.clipboard().write_image(&file).await?;
                Ok(Sharer::ClipboardImage)
            }
        }
    }
}

pub fn share_caption(text: &str) -> String {
    format!("Check out my \"{text}\" design created with {APP_TITLE}!")
}

/// Decodes `image` into `urban-jungle-<epoch_millis>.png`.
pub fn share_file(image: &str, epoch_millis: u64) -> Result<ShareFile, ShareError> {
    let decoded = decode_data_uri(image)?;
    let name = format!("{FILE_NAME_PREFIX}-{epoch_millis}.png");
    let mime_type = mime_guess::from_path(&name)
        .first_raw()
        .unwrap_or(DEFAULT_IMAGE_MIME)
        .to_string();

    Ok(ShareFile {
        name,
        mime_type,
        bytes: decoded.bytes,
    })
}

fn current_epoch_millis() -> u64 {
    llmapi::utils::current_timestamp_millis()
}
