use serde::{Deserialize, Serialize};

/// One message exchanged in a conversation, by either party.
///
/// Persisted to the local history file after every completed exchange so
/// the conversation is durable across restarts. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub sender: String,
    pub message: String,
    /// Stamped at creation. Older history files without timestamps are
    /// backfilled with the load instant.
    #[serde(default = "jiff::Timestamp::now")]
    pub timestamp: jiff::Timestamp,
}

impl ChatTurn {
    pub fn new(sender: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            message: message.into(),
            timestamp: jiff::Timestamp::now(),
        }
    }
}
