use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use uuid::Uuid;

use crate::credentials::CredentialProvider;
use crate::error::CredentialError;
use crate::flight::InFlight;
use crate::generation::ImageGenerator;
use crate::history::HistoryStore;
use crate::models::{GenerateOutcome, GenerationPhase, HistoryEntry, StylePreset};
use crate::share::ShareStatus;

#[derive(Debug)]
struct Session {
    phase: GenerationPhase,
    text: String,
    current_image: Option<String>,
    error: Option<String>,
    needs_credential: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            phase: GenerationPhase::Idle,
            text: String::new(),
            current_image: None,
            error: None,
            // Unknown until the first credential check.
            needs_credential: true,
        }
    }
}

/// Holds the generation slot. A generation dropped before it settles
/// (cancelled future or panicking generator) puts the session back to `Idle`.
struct PendingGeneration<'a> {
    _flight: InFlight<'a>,
    session: &'a Mutex<Session>,
    settled: bool,
}

impl PendingGeneration<'_> {
    fn settle(&mut self, session: &mut Session, phase: GenerationPhase) {
        session.phase = phase;
        self.settled = true;
    }
}

impl Drop for PendingGeneration<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut session = lock_session(self.session);
        if session.phase == GenerationPhase::Generating {
            tracing::warn!("generation dropped before completing");
            session.phase = GenerationPhase::Idle;
        }
    }
}

fn lock_session(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns the generate request lifecycle, the current image and the history.
pub struct GenerationOrchestrator {
    generator: Arc<dyn ImageGenerator>,
    credentials: Arc<dyn CredentialProvider>,
    share_status: ShareStatus,
    session: Mutex<Session>,
    history: Mutex<HistoryStore>,
    is_generating: AtomicBool,
}

impl GenerationOrchestrator {
    pub fn new(
        generator: Arc<dyn ImageGenerator>,
        credentials: Arc<dyn CredentialProvider>,
        share_status: ShareStatus,
    ) -> Self {
        Self {
            generator,
            credentials,
            share_status,
            session: Mutex::new(Session::default()),
            history: Mutex::new(HistoryStore::new()),
            is_generating: AtomicBool::new(false),
        }
    }

    /// Asks the provider whether a key is already available.
    pub async fn check_credentials(&self) -> bool {
        let has_credential = self.credentials.has_credential().await;
        self.session().needs_credential = !has_credential;
        tracing::info!(has_credential, "credential check complete");
        has_credential
    }

    pub async fn select_credential(&self) -> Result<(), CredentialError> {
        match self.credentials.request_credential_selection().await {
            Ok(()) => {
                self.session().needs_credential = false;
                Ok(())
            }
            Err(err) => {
                tracing::error!("Failed to select key: {err}");
                Err(err)
            }
        }
    }

    /// Generates an image for `text` in `style`.
    ///
    /// Blank text and calls made while a generation is running are ignored.
    /// Failures land in the session as a user-facing message and leave it
    /// ready for another attempt.
    pub async fn generate(&self, text: &str, style: &StylePreset) -> GenerateOutcome {
        if text.trim().is_empty() {
            return GenerateOutcome::Ignored;
        }
        let Some(flight) = InFlight::try_acquire(&self.is_generating) else {
            tracing::debug!("generation already in flight, ignoring request");
            return GenerateOutcome::Ignored;
        };
        let mut pending = PendingGeneration {
            _flight: flight,
            session: &self.session,
            settled: false,
        };

        {
            let mut session = self.session();
            session.phase = GenerationPhase::Generating;
            session.text = text.to_string();
            session.error = None;
            session.current_image = None;
        }
        self.share_status.reset();

        tracing::info!(style = %style.name, chars = text.chars().count(), "generating image");

        match self.generator.generate(text, &style.prompt_template).await {
            Ok(image_url) => {
                let entry = HistoryEntry {
                    id: Uuid::new_v4().to_string(),
                    text: text.to_string(),
                    style_name: style.name.clone(),
                    image_url: image_url.clone(),
                    created_at: Utc::now(),
                };

                {
                    let mut session = self.session();
                    session.current_image = Some(image_url);
                    pending.settle(&mut session, GenerationPhase::Success);
                }
                self.history().push(entry.clone());

                GenerateOutcome::Succeeded(entry)
            }
            Err(err) => {
                let message = err.user_message();
                let mut session = self.session();
                session.error = Some(message.clone());
                pending.settle(&mut session, GenerationPhase::Failed);
                GenerateOutcome::Failed(message)
            }
        }
    }

    /// Makes a past generation current again without calling the model.
    ///
    /// Returns `None` while generating or when `id` is unknown.
    pub fn select_history(&self, id: &str) -> Option<HistoryEntry> {
        let entry = self.history().get(id).cloned()?;
        {
            let mut session = self.session();
            // `generate` enters `Generating` under this same lock.
            if session.phase == GenerationPhase::Generating {
                return None;
            }
            session.text = entry.text.clone();
            session.current_image = Some(entry.image_url.clone());
        }
        self.share_status.reset();

        Some(entry)
    }

    fn history(&self) -> MutexGuard<'_, HistoryStore> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        self.history().entries().to_vec()
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating.load(Ordering::Acquire)
    }

    pub fn phase(&self) -> GenerationPhase {
        self.session().phase
    }

    pub fn current_text(&self) -> String {
        self.session().text.clone()
    }

    pub fn current_image(&self) -> Option<String> {
        self.session().current_image.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.session().error.clone()
    }

    pub fn needs_credential(&self) -> bool {
        self.session().needs_credential
    }

    pub fn share_status(&self) -> &ShareStatus {
        &self.share_status
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        lock_session(&self.session)
    }
}
