use thiserror::Error;

pub const SAFETY_BLOCKED_MESSAGE: &str =
    "Generation was blocked by safety settings. Please try a different text or style.";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to generate image. Please try again later or select a different style.";

/// Why a generation attempt produced no image.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("An API key is required to generate images.")]
    MissingCredential,

    #[error("No response candidates received from the model.")]
    NoCandidate,

    #[error("{}", SAFETY_BLOCKED_MESSAGE)]
    SafetyBlocked,

    /// The model answered with text instead of an image. Holds the already
    /// truncated, user-facing message.
    #[error("{0}")]
    ModelRefusal(String),

    #[error("No image data found in response. The model may have failed to generate the visual content.")]
    NoImageData,

    #[error("{0:#}")]
    Transport(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    MissingCredential,
    NoCandidate,
    SafetyBlocked,
    ModelRefusal,
    NoImageData,
    Transport,
}

impl GenerationError {
    pub fn kind(&self) -> GenerationErrorKind {
        match self {
            Self::MissingCredential => GenerationErrorKind::MissingCredential,
            Self::NoCandidate => GenerationErrorKind::NoCandidate,
            Self::SafetyBlocked => GenerationErrorKind::SafetyBlocked,
            Self::ModelRefusal(_) => GenerationErrorKind::ModelRefusal,
            Self::NoImageData => GenerationErrorKind::NoImageData,
            Self::Transport(_) => GenerationErrorKind::Transport,
        }
    }

    /// Message shown to the user; never empty.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}

#[derive(Debug, Error)]
pub enum ImageDataError {
    #[error("Image reference is not a data URI")]
    NotDataUri,
    #[error("Image data URI is not base64 encoded")]
    NotBase64,
    #[error("Failed to decode image data: {0}")]
    Decode(#[from] base64::DecodeError),
}

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Invalid image: {0}")]
    InvalidImage(#[from] ImageDataError),
    #[error("Native share failed: {0}")]
    Native(String),
    #[error("Upload failed: {0}")]
    Upload(#[from] reqwest::Error),
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),
}

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("No API key selected. Set {0} or choose a key.")]
    Missing(String),
    #[error("Credential selection failed: {0}")]
    Selection(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No image to export")]
    NoImage,
    #[error("Invalid image: {0}")]
    InvalidImage(#[from] ImageDataError),
    #[error("Unable to write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
