pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_ASPECT_RATIO: &str = "16:9";
pub const DEFAULT_IMAGE_MIME: &str = "image/png";
pub const DEFAULT_UPLOAD_ENDPOINT: &str = "https://file.io/?expires=1w";
pub const DEFAULT_SHARE_RESET_DELAY_MS: u64 = 3_000;

pub const APP_TITLE: &str = "Urban Jungle Typer";
pub const FILE_NAME_PREFIX: &str = "urban-jungle";
pub const PROMPT_TEXT_MARKER: &str = "${text}";
pub const MAX_INPUT_CHARS: usize = 20;
pub const REFUSAL_MESSAGE_CHARS: usize = 200;
pub const FINISH_REASON_STOP: &str = "STOP";
pub const FINISH_REASON_SAFETY: &str = "SAFETY";

pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];
