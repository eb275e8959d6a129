use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::{Value, json};

use crate::types::{LLMClient, LLMMessage, LLMMessageType};

use super::models::{GeminiResponse, GenerationConfig};

fn convert_body_parts_gemini(body_part: Vec<LLMMessageType>) -> Vec<Value> {
    body_part
        .into_iter()
        .map(|part| match part {
            LLMMessageType::TEXT(text) => json!({ "text": text }),
        })
        .collect()
}

pub fn convert_messages_to_gemini_contents(messages: Vec<LLMMessage>) -> Vec<Value> {
    messages
        .into_iter()
        .map(|m| {
            json!({
                "role": "user",
                "parts": convert_body_parts_gemini(m.content)
            })
        })
        .collect()
}

/// POSTs `messages` to `<endpoint>/<model>:generateContent`.
///
/// Connection failures, non-2xx statuses and undecodable bodies all surface
/// as errors with context attached.
pub async fn send_generate_request(
    http: &Client,
    api_client: &LLMClient,
    messages: Vec<LLMMessage>,
    generation_config: Option<&GenerationConfig>,
) -> Result<GeminiResponse> {
    let endpoint = api_client.endpoint().trim_end_matches('/');
    let url = format!(
        "{}/{}:generateContent",
        endpoint,
        api_client.default_model()
    );

    let mut body = json!({
        "contents": convert_messages_to_gemini_contents(messages)
    });
    if let Some(config) = generation_config {
        body["generationConfig"] =
            serde_json::to_value(config).context("Failed to encode generation config")?;
    }

    let response = http
        .post(url)
        .header("x-goog-api-key", api_client.api_key())
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .context("HTTP request failed")?;

    let status = response.status();
    let response_text = response
        .text()
        .await
        .context("Reading response body failed")?;

    if !status.is_success() {
        return Err(anyhow::anyhow!(
            "Gemini generateContent failed: status {} body {}",
            status,
            response_text
        ));
    }

    let response: GeminiResponse = serde_json::from_str(&response_text).with_context(|| {
        format!(
            "Failed to decode Gemini response JSON. Raw response: {}",
            response_text
        )
    })?;

    Ok(response)
}
