// Configuration structs

pub const DEFAULT_MODEL: &str = "gpt-4-turbo";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI API key
    pub api_key: String,

    /// Completion model used for intent classification
    pub model: String,

    /// Completion service base URL
    pub base_url: String,

    /// HTTP bind address
    pub bind_address: String,
}

impl Config {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}
