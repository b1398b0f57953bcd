//! Tokenizers for the supported script classes
//!
//! Whitespace is space, tab, carriage return and newline. Anything else
//! (punctuation included) belongs to a token: tokenization is deliberately
//! not grammar-aware.

use super::script::ScriptClass;

/// Errors produced while tokenizing a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// The text contains no non-whitespace characters
    EmptyDocument,
}

impl std::fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDocument => write!(f, "document is empty"),
        }
    }
}

impl std::error::Error for TokenizeError {}

/// Splits text into an ordered sequence of tokens
pub trait Tokenizer: Sync {
    /// Tokens in reading order. Returns an empty vector for blank input.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

#[inline]
fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// Tokenizer for space-delimited scripts
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        for (idx, ch) in text.char_indices() {
            match (is_separator(ch), start) {
                (true, Some(s)) => {
                    tokens.push(text[s..idx].to_string());
                    start = None;
                }
                (false, None) => start = Some(idx),
                _ => {}
            }
        }

        // A token running into the end of the text keeps its last character
        if let Some(s) = start {
            tokens.push(text[s..].to_string());
        }

        tokens
    }
}

/// Tokenizer for logographic scripts: one code point per token
#[derive(Debug, Clone, Copy, Default)]
pub struct LogographicTokenizer;

impl Tokenizer for LogographicTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.chars()
            .filter(|&ch| !is_separator(ch))
            .map(String::from)
            .collect()
    }
}

/// Tokenize `text` with the tokenizer of `script`
///
/// Fails with [`TokenizeError::EmptyDocument`] when the text holds nothing
/// but whitespace, so callers never end up with an undefined cursor.
pub fn tokenize(text: &str, script: ScriptClass) -> Result<Vec<String>, TokenizeError> {
    let tokens = script.tokenizer().tokenize(text);
    if tokens.is_empty() {
        return Err(TokenizeError::EmptyDocument);
    }
    Ok(tokens)
}
