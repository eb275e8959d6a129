#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;
use urban_jungle_lib::share::{Clipboard, FileUploader, NativeShare, ShareData, ShareFile};
use urban_jungle_lib::{GenerationError, ImageGenerator, ShareError, StylePreset};

pub const PNG_B64: &str = "iVBORw0KGgo=";
pub const PNG_BYTES: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

pub fn png_uri() -> String {
    format!("data:image/png;base64,{PNG_B64}")
}

pub fn style(name: &str) -> StylePreset {
    StylePreset {
        id: name.to_lowercase(),
        name: name.to_string(),
        description: format!("{name} lettering"),
        prompt_template: "Typography of the word \"${text}\" overgrown with jungle vines".into(),
        preview_color: "from-green-500 to-emerald-700".into(),
    }
}

/// Scripted generator. Pops one queued result per call, optionally waiting
/// for `release` first.
#[derive(Default)]
pub struct FakeGenerator {
    pub calls: AtomicUsize,
    pub requests: Mutex<Vec<(String, String)>>,
    results: Mutex<VecDeque<Result<String, GenerationError>>>,
    gate: Option<(Arc<Notify>, Arc<Notify>)>,
}

impl FakeGenerator {
    pub fn new(results: Vec<Result<String, GenerationError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            ..Self::default()
        }
    }

    /// Returns the generator plus `(started, release)` notifiers.
    pub fn gated(results: Vec<Result<String, GenerationError>>) -> (Self, Arc<Notify>, Arc<Notify>) {
        let started = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let generator = Self {
            gate: Some((started.clone(), release.clone())),
            ..Self::new(results)
        };
        (generator, started, release)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageGenerator for FakeGenerator {
    async fn generate(&self, text: &str, prompt_template: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push((text.to_string(), prompt_template.to_string()));

        if let Some((started, release)) = &self.gate {
            started.notify_one();
            release.notified().await;
        }

        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GenerationError::NoImageData))
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub texts: Mutex<Vec<String>>,
    pub images: Mutex<Vec<ShareFile>>,
    pub fail: bool,
}

impl RecordingClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn writes(&self) -> usize {
        self.texts.lock().unwrap().len() + self.images.lock().unwrap().len()
    }
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ShareError> {
        if self.fail {
            return Err(ShareError::Clipboard("clipboard denied".into()));
        }
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn write_image(&self, image: &ShareFile) -> Result<(), ShareError> {
        if self.fail {
            return Err(ShareError::Clipboard("clipboard denied".into()));
        }
        self.images.lock().unwrap().push(image.clone());
        Ok(())
    }
}

pub struct FakeUploader {
    pub calls: AtomicUsize,
    link: Option<String>,
}

impl FakeUploader {
    pub fn returning(link: Option<&str>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            link: link.map(str::to_string),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FileUploader for FakeUploader {
    async fn upload(&self, _file: &ShareFile) -> Result<Option<String>, ShareError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.link.clone())
    }
}

#[derive(Default)]
pub struct FakeNativeShare {
    pub accepts: bool,
    pub fail: bool,
    pub shared: Mutex<Vec<ShareData>>,
    gate: Option<(Arc<Notify>, Arc<Notify>)>,
}

impl FakeNativeShare {
    pub fn accepting() -> Self {
        Self {
            accepts: true,
            ..Self::default()
        }
    }

    pub fn rejecting() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            accepts: true,
            fail: true,
            ..Self::default()
        }
    }

    pub fn gated() -> (Self, Arc<Notify>, Arc<Notify>) {
        let started = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let native = Self {
            accepts: true,
            gate: Some((started.clone(), release.clone())),
            ..Self::default()
        };
        (native, started, release)
    }

    pub fn share_count(&self) -> usize {
        self.shared.lock().unwrap().len()
    }
}

#[async_trait]
impl NativeShare for FakeNativeShare {
    fn can_share(&self, _file: &ShareFile) -> bool {
        self.accepts
    }

    async fn share(&self, data: ShareData) -> Result<(), ShareError> {
        if let Some((started, release)) = &self.gate {
            started.notify_one();
            release.notified().await;
        }
        if self.fail {
            return Err(ShareError::Native("user dismissed share sheet".into()));
        }
        self.shared.lock().unwrap().push(data);
        Ok(())
    }
}
