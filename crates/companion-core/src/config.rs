use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CoreError;

/// Environment variable consulted for the API credential when the config
/// file carries none.
pub const API_KEY_ENV: &str = "COMPANION_API_KEY";

/// Process-wide configuration, constructed once at startup and passed by
/// reference to the request builder and transport.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Endpoint settings for the chat API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Bare token, without the `Bearer ` prefix. Empty means "read from
    /// the environment at load time".
    #[serde(default)]
    pub api_key: String,
    pub timeout_secs: u64,
    /// Extra attempts after the first, applied only to retriable statuses.
    pub max_retries: u32,
}

/// Conversation defaults used when a request does not override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    pub bot_name: String,
    pub user_name: String,
    pub system_prompt: String,
    pub history_file: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url:
                "http://guanaco-submitter.guanaco-backend.k2.chaiverse.com/endpoints/onsite/chat"
                    .to_string(),
            api_key: String::new(),
            timeout_secs: 30,
            max_retries: 2,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: "CHAI Friend".to_string(),
            user_name: "You".to_string(),
            system_prompt: "This conversation must be family friendly. Avoid using profanity, \
                            or being rude. Be courteous and use language which is appropriate \
                            for any audience. Avoid NSFW content. ###"
                .to_string(),
            history_file: "chat_history.json".to_string(),
        }
    }
}

impl ApiConfig {
    /// The `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Config(format!("failed to read {}: {e}", path.display())))?;
        let mut config: AppConfig = serde_json::from_str(&contents)?;
        config.apply_env();
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is
    /// missing or malformed. A malformed file is logged, never fatal.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            let mut config = Self::default();
            config.apply_env();
            return config;
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                let mut config = Self::default();
                config.apply_env();
                config
            }
        }
    }

    /// Write configuration as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        let body = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, body)
            .map_err(|e| CoreError::Config(format!("failed to write {}: {e}", path.display())))
    }

    fn apply_env(&mut self) {
        if self.api.api_key.is_empty() {
            if let Ok(key) = std::env::var(API_KEY_ENV) {
                self.api.api_key = key;
            }
        }
    }
}
