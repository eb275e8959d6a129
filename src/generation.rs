use std::sync::Arc;

use async_trait::async_trait;
use llmapi::gemini::models::{Candidate, GeminiResponse};
use llmapi::gemini::{send_generate_request, GenerationConfig};
use llmapi::{LLMClient, LLMMessage};

use crate::config::AppConfig;
use crate::constants::{
    FINISH_REASON_SAFETY, FINISH_REASON_STOP, PROMPT_TEXT_MARKER, REFUSAL_MESSAGE_CHARS,
};
use crate::credentials::CredentialProvider;
use crate::error::GenerationError;
use crate::image_data::png_data_uri;

/// Turns user text plus a style template into a displayable image reference.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, text: &str, prompt_template: &str) -> Result<String, GenerationError>;
}

/// `ImageGenerator` backed by Gemini's `generateContent` endpoint.
pub struct GeminiImageClient {
    http: reqwest::Client,
    credentials: Arc<dyn CredentialProvider>,
    endpoint: String,
    model: String,
    generation_config: GenerationConfig,
}

impl GeminiImageClient {
    pub fn new(config: &AppConfig, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
            endpoint: config.gemini_endpoint.clone(),
            model: config.model.clone(),
            generation_config: GenerationConfig::single_image(config.aspect_ratio.clone()),
        }
    }
}

impl GeminiImageClient {
    async fn request_image(&self, text: &str, prompt_template: &str) -> Result<String, GenerationError> {
        // Resolved per call so a newly selected key takes effect immediately.
        let api_key = self
            .credentials
            .api_key()
            .ok_or(GenerationError::MissingCredential)?;
        let client = LLMClient::new(api_key, self.endpoint.as_str(), self.model.as_str());

        let prompt = build_prompt(text, prompt_template);
        tracing::debug!(model = client.default_model(), prompt = %prompt, "requesting image");

        let response = send_generate_request(
            &self.http,
            &client,
            vec![LLMMessage::user_text(prompt)],
            Some(&self.generation_config),
        )
        .await?;

        extract_image(response)
    }
}

#[async_trait]
impl ImageGenerator for GeminiImageClient {
    async fn generate(&self, text: &str, prompt_template: &str) -> Result<String, GenerationError> {
        let result = self.request_image(text, prompt_template).await;
        if let Err(err) = &result {
            tracing::error!(kind = ?err.kind(), "Error generating jungle image: {err}");
        }
        result
    }
}

/// Uppercases `text` and drops it into the template's marker.
pub fn build_prompt(text: &str, prompt_template: &str) -> String {
    prompt_template.replacen(PROMPT_TEXT_MARKER, &text.to_uppercase(), 1)
}

/// Validates a Gemini response and pulls out the first inline image.
pub fn extract_image(response: GeminiResponse) -> Result<String, GenerationError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(GenerationError::NoCandidate)?;

    check_finish_reason(&candidate)?;

    let parts = candidate.parts();

    if let Some(inline_data) = parts
        .iter()
        .filter_map(|part| part.inline_data.as_ref())
        .find(|inline_data| !inline_data.data.is_empty())
    {
        return Ok(png_data_uri(&inline_data.data));
    }

    if let Some(text) = parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .find(|text| !text.is_empty())
    {
        return Err(GenerationError::ModelRefusal(refusal_message(text)));
    }

    Err(GenerationError::NoImageData)
}

fn check_finish_reason(candidate: &Candidate) -> Result<(), GenerationError> {
    match candidate.finish_reason.as_deref() {
        None | Some(FINISH_REASON_STOP) => Ok(()),
        Some(FINISH_REASON_SAFETY) => Err(GenerationError::SafetyBlocked),
        Some(reason) => {
            tracing::warn!("Generation stopped with reason: {reason}");
            Ok(())
        }
    }
}

fn refusal_message(text: &str) -> String {
    let truncated: String = text.chars().take(REFUSAL_MESSAGE_CHARS).collect();
    format!("{truncated}...")
}
