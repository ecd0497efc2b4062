use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use companion_core::models::turn::ChatTurn;

use crate::error::StoreError;

/// The conversation history for one user, backed by a local JSON file.
///
/// Loading is best-effort: a missing or malformed file starts an empty
/// conversation rather than failing, since losing history should never
/// block chatting. Once loaded, the in-memory sequence is authoritative;
/// each persist rewrites the whole file.
///
/// Intended to be owned and mutated by the coordination side only. There
/// is no locking — a second process writing the same file is
/// last-writer-wins.
pub struct HistoryStore {
    path: PathBuf,
    turns: Vec<ChatTurn>,
}

impl HistoryStore {
    /// Load history from `path`, or start empty if it cannot be read.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let turns = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Vec<ChatTurn>>(&contents) {
                Ok(turns) => {
                    info!(path = %path.display(), count = turns.len(), "loaded chat history");
                    turns
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "malformed history file, starting empty");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable history file, starting empty");
                Vec::new()
            }
        };
        Self { path, turns }
    }

    /// Append a turn in memory only. Used for the user's turn while the
    /// request is still in flight; the file catches up on the next persist.
    pub fn append(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    /// Append a turn and rewrite the file. A persistence failure is
    /// logged and swallowed — memory stays authoritative for the rest of
    /// the process.
    pub fn append_and_persist(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
        if let Err(e) = self.persist() {
            error!(path = %self.path.display(), error = %e, "failed to persist chat history");
        }
    }

    /// Rewrite the whole file from the in-memory sequence.
    pub fn persist(&self) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(&self.turns)?;
        std::fs::write(&self.path, body)
            .map_err(|e| StoreError::Write(format!("{}: {e}", self.path.display())))
    }

    /// Drop all turns and persist the now-empty conversation.
    pub fn clear_and_persist(&mut self) -> Result<(), StoreError> {
        self.turns.clear();
        self.persist()
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
