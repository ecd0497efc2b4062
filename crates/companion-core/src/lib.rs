//! companion-core
//!
//! Pure domain types and configuration for the Companion chat client.
//! No HTTP dependency — this is the shared vocabulary of the system.

pub mod config;
pub mod error;
pub mod models;
