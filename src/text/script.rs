//! Script classes - how a writing system separates its words

use super::tokenizer::{LogographicTokenizer, Tokenizer, WhitespaceTokenizer};
use crate::language::LanguageKey;

/// Writing-system family, selected once when a document is opened
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScriptClass {
    /// Words are separated by spaces, tabs or newlines (Latin, Cyrillic, Greek...)
    #[default]
    SpaceDelimited,
    /// Every character is a unit of study (Chinese hanzi)
    Logographic,
}

static WHITESPACE: WhitespaceTokenizer = WhitespaceTokenizer;
static LOGOGRAPHIC: LogographicTokenizer = LogographicTokenizer;

impl ScriptClass {
    /// Script class of a studied language; unregistered names are space-delimited
    pub fn for_language(language: &LanguageKey) -> Self {
        language
            .entry
            .map(|lang| lang.script)
            .unwrap_or_default()
    }

    /// The tokenizer implementation for this script class
    pub fn tokenizer(self) -> &'static dyn Tokenizer {
        match self {
            ScriptClass::SpaceDelimited => &WHITESPACE,
            ScriptClass::Logographic => &LOGOGRAPHIC,
        }
    }

    /// Short label for the status line
    pub fn label(self) -> &'static str {
        match self {
            ScriptClass::SpaceDelimited => "words",
            ScriptClass::Logographic => "characters",
        }
    }
}
