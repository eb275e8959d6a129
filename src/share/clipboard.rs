use std::borrow::Cow;

use async_trait::async_trait;

use super::platform::{Clipboard, ShareFile};
use crate::error::ShareError;

/// OS clipboard via arboard. Each write opens its own handle on a blocking
/// thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ShareError> {
        let text = text.to_string();
        run_blocking(move || {
            let mut clipboard = open()?;
            clipboard
                .set_text(text)
                .map_err(|e| ShareError::Clipboard(e.to_string()))
        })
        .await
    }

    async fn write_image(&self, image: &ShareFile) -> Result<(), ShareError> {
        let bytes = image.bytes.clone();
        run_blocking(move || {
            let rgba = image::load_from_memory(&bytes)
                .map_err(|e| ShareError::Clipboard(format!("unreadable image: {e}")))?
                .to_rgba8();
            let (width, height) = rgba.dimensions();

            let mut clipboard = open()?;
            clipboard
                .set_image(arboard::ImageData {
                    width: width as usize,
                    height: height as usize,
                    bytes: Cow::Owned(rgba.into_raw()),
                })
                .map_err(|e| ShareError::Clipboard(e.to_string()))
        })
        .await
    }
}

fn open() -> Result<arboard::Clipboard, ShareError> {
    arboard::Clipboard::new().map_err(|e| ShareError::Clipboard(e.to_string()))
}

async fn run_blocking<F>(job: F) -> Result<(), ShareError>
where
    F: FnOnce() -> Result<(), ShareError> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| ShareError::Clipboard(format!("clipboard task failed: {e}")))?
}
