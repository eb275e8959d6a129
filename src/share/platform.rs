use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ShareError;

/// An image wrapped as a named file, ready to hand to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub files: Vec<ShareFile>,
}

/// OS share sheet.
#[async_trait]
pub trait NativeShare: Send + Sync {
    fn can_share(&self, file: &ShareFile) -> bool;
    async fn share(&self, data: ShareData) -> Result<(), ShareError>;
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ShareError>;
    async fn write_image(&self, image: &ShareFile) -> Result<(), ShareError>;
}

/// Temporary public file hosting.
#[async_trait]
pub trait FileUploader: Send + Sync {
    /// `Ok(None)` when the host refused the file or returned no link.
    async fn upload(&self, file: &ShareFile) -> Result<Option<String>, ShareError>;
}

/// Sharing facilities available on the current host.
#[derive(Clone)]
pub struct SharePlatform {
    native: Option<Arc<dyn NativeShare>>,
    clipboard: Arc<dyn Clipboard>,
    uploader: Arc<dyn FileUploader>,
}

impl SharePlatform {
    pub fn new(clipboard: Arc<dyn Clipboard>, uploader: Arc<dyn FileUploader>) -> Self {
        Self {
            native: None,
            clipboard,
            uploader,
        }
    }

    pub fn with_native_share(mut self, native: Arc<dyn NativeShare>) -> Self {
        self.native = Some(native);
        self
    }

    pub fn native(&self) -> Option<&Arc<dyn NativeShare>> {
        self.native.as_ref()
    }

    pub fn clipboard(&self) -> &Arc<dyn Clipboard> {
        &self.clipboard
    }

    pub fn uploader(&self) -> &Arc<dyn FileUploader> {
        &self.uploader
    }
}

/// How an image leaves the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sharer {
    NativeShare,
    /// Upload, then copy the public link. Falls back to `ClipboardImage`.
    ClipboardLink,
    ClipboardImage,
}

pub type CapabilityProbe = Arc<dyn Fn(&SharePlatform, &ShareFile) -> Sharer + Send + Sync>;

pub fn probe_capabilities(platform: &SharePlatform, file: &ShareFile) -> Sharer {
    match platform.native() {
        Some(native) if native.can_share(file) => Sharer::NativeShare,
        _ => Sharer::ClipboardLink,
    }
}
