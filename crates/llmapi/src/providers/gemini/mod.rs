mod api;
pub mod models;

pub use api::{convert_messages_to_gemini_contents, send_generate_request};
pub use models::{GeminiResponse, GenerationConfig, ImageConfig};
