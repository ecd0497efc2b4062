use serde::Serialize;

use crate::config::ChatConfig;
use crate::error::CoreError;
use crate::models::turn::ChatTurn;

/// A fully-formed outbound chat call, built fresh per send.
///
/// `bot_name`, `user_name`, and `system_prompt` default from the process
/// configuration at build time; the `with_*` setters override them for a
/// single request. Not mutated after construction.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub user_message: String,
    pub history: Vec<ChatTurn>,
    pub bot_name: String,
    pub user_name: String,
    pub system_prompt: String,
}

impl ChatRequest {
    /// Build a request, defaulting the optional fields from config.
    ///
    /// Fails with [`CoreError::EmptyMessage`] when `user_message` trims
    /// to nothing — validation happens here, before any network activity.
    pub fn build(
        user_message: impl Into<String>,
        history: Vec<ChatTurn>,
        chat: &ChatConfig,
    ) -> Result<Self, CoreError> {
        let user_message = user_message.into();
        if user_message.trim().is_empty() {
            return Err(CoreError::EmptyMessage);
        }
        Ok(Self {
            user_message,
            history,
            bot_name: chat.bot_name.clone(),
            user_name: chat.user_name.clone(),
            system_prompt: chat.system_prompt.clone(),
        })
    }

    pub fn with_bot_name(mut self, bot_name: impl Into<String>) -> Self {
        self.bot_name = bot_name.into();
        self
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    /// The JSON body for the endpoint. History order is preserved;
    /// per-turn timestamps are dropped — the endpoint has no use for them.
    pub fn wire_payload(&self) -> WirePayload<'_> {
        WirePayload {
            memory: "",
            prompt: &self.system_prompt,
            bot_name: &self.bot_name,
            user_name: &self.user_name,
            chat_history: self
                .history
                .iter()
                .map(|turn| WireTurn {
                    sender: &turn.sender,
                    message: &turn.message,
                })
                .collect(),
        }
    }
}

/// Borrow view of a [`ChatRequest`] serialized as the endpoint expects it.
#[derive(Debug, Serialize)]
pub struct WirePayload<'a> {
    pub memory: &'static str,
    pub prompt: &'a str,
    pub bot_name: &'a str,
    pub user_name: &'a str,
    pub chat_history: Vec<WireTurn<'a>>,
}

/// One history entry on the wire: sender and message only.
#[derive(Debug, Serialize)]
pub struct WireTurn<'a> {
    pub sender: &'a str,
    pub message: &'a str,
}
