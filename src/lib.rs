//! lingo - Elm-style terminal reader for studying foreign-language texts
//!
//! This crate provides the core types and logic for a word-by-word reader:
//! tokenized, paginated documents, per-language proficiency records, and the
//! translation, pronunciation, and dictionary export services around them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod export;
pub mod input;
pub mod language;
pub mod library;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod services;
pub mod store;
pub mod text;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ReaderConfig;
pub use messages::Msg;
pub use model::AppModel;
