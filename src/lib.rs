mod app;
mod config;
mod constants;
mod credentials;
mod download;
mod error;
mod flight;
mod fs_utils;
mod generation;
mod history;
mod image_data;
mod logging;
mod models;
mod orchestrator;
pub mod share;

#[cfg(feature = "desktop")]
mod commands;

pub use app::UrbanJungleApp;
pub use config::AppConfig;
pub use constants::{
    APP_TITLE, DEFAULT_ASPECT_RATIO, DEFAULT_GEMINI_ENDPOINT, DEFAULT_IMAGE_MIME,
    DEFAULT_IMAGE_MODEL, DEFAULT_SHARE_RESET_DELAY_MS, DEFAULT_UPLOAD_ENDPOINT, MAX_INPUT_CHARS,
    PROMPT_TEXT_MARKER,
};
pub use credentials::{CredentialProvider, EnvCredentialProvider, StaticCredentialProvider};
pub use download::{download_file_name, export_image, slug};
pub use error::{
    CredentialError, ExportError, GenerationError, GenerationErrorKind, ImageDataError,
    ShareError, GENERIC_FAILURE_MESSAGE, SAFETY_BLOCKED_MESSAGE,
};
pub use generation::{build_prompt, extract_image, GeminiImageClient, ImageGenerator};
pub use history::HistoryStore;
pub use image_data::{decode_data_uri, png_data_uri, DecodedImage};
pub use logging::init_logging;
pub use models::{GenerateOutcome, GenerationPhase, HistoryEntry, SessionSnapshot, StylePreset};
pub use orchestrator::GenerationOrchestrator;
pub use share::{ShareExporter, ShareOutcome, SharePlatform, ShareStatus};

/// Tauri builder with the session managed as state and every command wired.
/// Hosts add their own context: `builder(app).run(tauri::generate_context!())`.
#[cfg(feature = "desktop")]
pub fn builder(app: UrbanJungleApp) -> tauri::Builder<tauri::Wry> {
    init_logging();

    tauri::Builder::default()
        .manage(app)
        .invoke_handler(tauri::generate_handler![
            commands::generate::check_credentials,
            commands::generate::select_credential,
            commands::generate::generate_image,
            commands::generate::select_history,
            commands::generate::list_history,
            commands::generate::session_snapshot,
            commands::share::share_image,
            commands::share::download_image
        ])
}

/// Session backed by environment credentials, file.io and the OS clipboard.
#[cfg(feature = "desktop")]
pub fn default_app() -> UrbanJungleApp {
    let config = AppConfig::default();
    let platform = SharePlatform::system(&config);
    UrbanJungleApp::new(
        config,
        std::sync::Arc::new(EnvCredentialProvider::new()),
        platform,
    )
}
