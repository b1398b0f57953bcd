//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The runtime executes them and feeds the outcome back as a message.

use std::path::PathBuf;

use crate::language::LanguageKey;
use crate::store::ProficiencyRecord;

/// Side effects requested by `update`
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// Nothing to do beyond a redraw
    #[default]
    Redraw,
    /// Translate `word`; answers with `ServiceMsg::Translated`
    Translate {
        word: String,
        source: String,
        target: String,
    },
    /// Fetch and play the pronunciation of `word`; answers with `ServiceMsg::Pronounced`
    PlayAudio { word: String, voice: String },
    /// Open a URL in the system browser; answers with `ServiceMsg::UrlOpened`
    OpenUrl(String),
    /// Translate the studied words of `record` and write them to `path`;
    /// answers with `ServiceMsg::Exported`
    ExportDictionary {
        language: LanguageKey,
        target: String,
        record: ProficiencyRecord,
        path: PathBuf,
    },
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Whether executing this command blocks on the network or a subprocess
    pub fn is_blocking(&self) -> bool {
        match self {
            Cmd::Redraw | Cmd::Quit => false,
            Cmd::Translate { .. } | Cmd::PlayAudio { .. } | Cmd::ExportDictionary { .. } => true,
            Cmd::OpenUrl(_) => false,
        }
    }

    /// Whether this command asks the runtime to exit
    pub fn is_quit(&self) -> bool {
        matches!(self, Cmd::Quit)
    }
}
