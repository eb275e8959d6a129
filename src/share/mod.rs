#[cfg(feature = "clipboard")]
mod clipboard;
mod exporter;
mod platform;
mod status;
mod upload;

#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;
pub use exporter::{share_caption, share_file, ShareExporter};
pub use platform::{
    probe_capabilities, CapabilityProbe, Clipboard, FileUploader, NativeShare, ShareData,
    ShareFile, SharePlatform, Sharer,
};
pub use status::{ShareOutcome, ShareStatus};
pub use upload::FileIoUploader;

#[cfg(feature = "clipboard")]
impl SharePlatform {
    /// Upload + OS clipboard. Desktop hosts have no share sheet by default.
    pub fn system(config: &crate::config::AppConfig) -> Self {
        Self::new(
            std::sync::Arc::new(SystemClipboard::new()),
            std::sync::Arc::new(FileIoUploader::new(config.upload_endpoint.clone())),
        )
    }
}
