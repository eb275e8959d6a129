use std::path::PathBuf;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::credentials::CredentialProvider;
use crate::download::export_image;
use crate::error::ExportError;
use crate::generation::{GeminiImageClient, ImageGenerator};
use crate::models::SessionSnapshot;
use crate::orchestrator::GenerationOrchestrator;
use crate::share::{ShareExporter, ShareOutcome, SharePlatform, ShareStatus};

/// One user session: generation, history, sharing and export wired together.
pub struct UrbanJungleApp {
    config: AppConfig,
    orchestrator: GenerationOrchestrator,
    exporter: ShareExporter,
}

impl UrbanJungleApp {
    pub fn new(
        config: AppConfig,
        credentials: Arc<dyn CredentialProvider>,
        platform: SharePlatform,
    ) -> Self {
        let generator = Arc::new(GeminiImageClient::new(&config, credentials.clone()));
        Self::with_generator(config, credentials, generator, platform)
    }

    pub fn with_generator(
        config: AppConfig,
        credentials: Arc<dyn CredentialProvider>,
        generator: Arc<dyn ImageGenerator>,
        platform: SharePlatform,
    ) -> Self {
        let share_status = ShareStatus::new();
        let orchestrator = GenerationOrchestrator::new(generator, credentials, share_status.clone());
        let exporter = ShareExporter::new(platform, share_status, config.share_reset_delay());

        Self {
            config,
            orchestrator,
            exporter,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn orchestrator(&self) -> &GenerationOrchestrator {
        &self.orchestrator
    }

    pub fn exporter(&self) -> &ShareExporter {
        &self.exporter
    }

    /// Shares whatever is current right now. `None` if there is no image or a
    /// share is already running.
    pub async fn share_current(&self) -> Option<ShareOutcome> {
        let image = self.orchestrator.current_image()?;
        let text = self.orchestrator.current_text();
        self.exporter.share(&image, &text).await
    }

    pub async fn download_current(&self) -> Result<PathBuf, ExportError> {
        let image = self
            .orchestrator
            .current_image()
            .ok_or(ExportError::NoImage)?;
        let text = self.orchestrator.current_text();
        export_image(&image, &text, &self.config.resolved_download_dir()).await
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.orchestrator.phase(),
            text: self.orchestrator.current_text(),
            current_image: self.orchestrator.current_image(),
            error: self.orchestrator.error(),
            share_outcome: self.exporter.status().get(),
            is_generating: self.orchestrator.is_generating(),
            is_sharing: self.exporter.is_sharing(),
            needs_credential: self.orchestrator.needs_credential(),
        }
    }
}
