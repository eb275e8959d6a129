use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::share::ShareOutcome;

/// A named prompt template. `prompt_template` carries one `${text}` marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StylePreset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub prompt_template: String,
    pub preview_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub text: String,
    pub style_name: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GenerationPhase {
    #[default]
    Idle,
    Generating,
    Success,
    Failed,
}

/// What a `generate` call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Empty input, or another generation was already running.
    Ignored,
    Succeeded(HistoryEntry),
    Failed(String),
}

/// UI-facing view of the session.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub phase: GenerationPhase,
    pub text: String,
    pub current_image: Option<String>,
    pub error: Option<String>,
    pub share_outcome: ShareOutcome,
    pub is_generating: bool,
    pub is_sharing: bool,
    pub needs_credential: bool,
}
