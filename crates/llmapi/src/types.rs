use crate::utils;

/// One part of a request turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LLMMessageType {
    TEXT(String),
}
impl LLMMessageType {
    pub fn text(text: impl Into<String>) -> Self {
        LLMMessageType::TEXT(text.into())
    }
}

/// One user turn.
#[derive(Clone, Debug)]
pub struct LLMMessage {
    pub id: String,
    pub content: Vec<LLMMessageType>,
    pub created_at: i64,
}

impl LLMMessage {
    pub fn new(id: Option<String>, content: Vec<LLMMessageType>) -> Self {
        let id = id.unwrap_or_else(|| utils::current_timestamp_millis().to_string());
        Self {
            id,
            content,
            created_at: utils::current_timestamp_millis() as i64,
        }
    }

    /// Single user turn carrying one text part.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self::new(None, vec![LLMMessageType::text(text)])
    }
}

/// Connection settings for one Gemini model.
#[derive(Clone)]
pub struct LLMClient {
    pub(crate) api_key: String,
    pub(crate) endpoint: String,
    pub(crate) default_model: String,
}

impl LLMClient {
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        default_model: impl Into<String>,
    ) -> Self {
        let default_model = default_model.into();
        let default_model = default_model
            .strip_prefix("models/")
            .map(str::to_string)
            .unwrap_or(default_model);

        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            default_model,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }
}

// Keep the key out of debug output.
impl std::fmt::Debug for LLMClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMClient")
            .field("endpoint", &self.endpoint)
            .field("default_model", &self.default_model)
            .finish_non_exhaustive()
    }
}
