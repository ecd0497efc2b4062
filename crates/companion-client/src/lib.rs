//! companion-client
//!
//! HTTP transport to the chat endpoint and the dispatch bridge that keeps
//! network calls off the coordination thread.

pub mod dispatch;
pub mod error;
pub mod transport;
