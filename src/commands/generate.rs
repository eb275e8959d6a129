use tauri::State;

use crate::app::UrbanJungleApp;
use crate::constants::MAX_INPUT_CHARS;
use crate::models::{GenerateOutcome, HistoryEntry, SessionSnapshot, StylePreset};

#[tauri::command]
pub async fn check_credentials(app: State<'_, UrbanJungleApp>) -> Result<SessionSnapshot, String> {
    app.orchestrator().check_credentials().await;
    Ok(app.snapshot())
}

#[tauri::command]
pub async fn select_credential(app: State<'_, UrbanJungleApp>) -> Result<SessionSnapshot, String> {
    app.orchestrator()
        .select_credential()
        .await
        .map_err(|err| err.to_string())?;
    Ok(app.snapshot())
}

#[tauri::command]
pub async fn generate_image(
    app: State<'_, UrbanJungleApp>,
    text: String,
    style: StylePreset,
) -> Result<SessionSnapshot, String> {
    if text.chars().count() > MAX_INPUT_CHARS {
        return Err(format!("Text is limited to {} characters.", MAX_INPUT_CHARS));
    }

    if let GenerateOutcome::Ignored = app.orchestrator().generate(&text, &style).await {
        tracing::debug!("generate request ignored");
    }
    Ok(app.snapshot())
}

#[tauri::command]
pub fn select_history(app: State<'_, UrbanJungleApp>, id: String) -> Result<SessionSnapshot, String> {
    app.orchestrator()
        .select_history(&id)
        .ok_or_else(|| format!("History entry '{}' is not available.", id))?;
    Ok(app.snapshot())
}

#[tauri::command]
pub fn list_history(app: State<'_, UrbanJungleApp>) -> Vec<HistoryEntry> {
    app.orchestrator().history_entries()
}

#[tauri::command]
pub fn session_snapshot(app: State<'_, UrbanJungleApp>) -> SessionSnapshot {
    app.snapshot()
}
