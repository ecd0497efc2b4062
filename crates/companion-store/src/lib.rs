//! companion-store
//!
//! Local persistence of the conversation. A single JSON file, rewritten
//! whole after every completed exchange.

pub mod error;
pub mod history;
