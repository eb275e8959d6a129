use tauri::State;

use crate::app::UrbanJungleApp;
use crate::models::SessionSnapshot;

#[tauri::command]
pub async fn share_image(app: State<'_, UrbanJungleApp>) -> Result<SessionSnapshot, String> {
    if app.orchestrator().current_image().is_none() {
        return Err("Generate an image before sharing.".into());
    }
    app.share_current().await;
    Ok(app.snapshot())
}

#[tauri::command]
pub async fn download_image(app: State<'_, UrbanJungleApp>) -> Result<String, String> {
    let path = app
        .download_current()
        .await
        .map_err(|err| format!("Failed to download image: {}", err))?;
    Ok(path.display().to_string())
}
