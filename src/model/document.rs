//! Document model - the token sequence of an opened text and its pages

use std::collections::BTreeSet;
use std::ops::Range;
use std::path::PathBuf;

use super::pagination::{paginate_len, PageLayout};
use crate::text::{tokenize, ScriptClass, TokenizeError};

/// An opened text, tokenized and paginated
#[derive(Debug, Clone)]
pub struct Document {
    /// Tokens in reading order (immutable after tokenization)
    pub tokens: Vec<String>,
    /// Page ranges over `tokens`, recomputed on every layout change
    pub pages: Vec<Range<usize>>,
    /// Layout the pages were computed with
    pub layout: PageLayout,
    /// Script class the text was tokenized with
    pub script: ScriptClass,
    /// Path to the file on disk (None for in-memory texts)
    pub file_path: Option<PathBuf>,
    /// True when the text was blank and replaced by the placeholder
    pub is_placeholder: bool,
}

impl Document {
    /// Single token shown in place of a blank text
    pub const PLACEHOLDER_TEXT: &'static str = "document is empty";

    /// Tokenize and paginate `text`
    pub fn from_text(
        text: &str,
        script: ScriptClass,
        layout: PageLayout,
    ) -> Result<Self, TokenizeError> {
        let tokens = tokenize(text, script)?;
        Ok(Self::from_tokens(tokens, script, layout))
    }

    /// Tokenize `text`, substituting the placeholder document when it is blank
    pub fn open(text: &str, script: ScriptClass, layout: PageLayout) -> Self {
        match Self::from_text(text, script, layout) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::info!("Opening placeholder document: {}", e);
                Self::placeholder(layout)
            }
        }
    }

    /// The placeholder document: one token, never rated
    pub fn placeholder(layout: PageLayout) -> Self {
        let mut doc = Self::from_tokens(
            vec![Self::PLACEHOLDER_TEXT.to_string()],
            ScriptClass::SpaceDelimited,
            layout,
        );
        doc.is_placeholder = true;
        doc
    }

    /// A document with no tokens and no pages
    pub fn empty() -> Self {
        Self::from_tokens(Vec::new(), ScriptClass::default(), PageLayout::default())
    }

    fn from_tokens(tokens: Vec<String>, script: ScriptClass, layout: PageLayout) -> Self {
        let pages = paginate_len(tokens.len(), layout);
        Self {
            tokens,
            pages,
            layout,
            script,
            file_path: None,
            is_placeholder: false,
        }
    }

    /// Attach the path the text was read from
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.file_path = Some(path);
        self
    }

    /// Recompute pages for `layout`. Returns true when the layout changed.
    pub fn repaginate(&mut self, layout: PageLayout) -> bool {
        let changed = layout != self.layout;
        self.layout = layout;
        self.pages = paginate_len(self.tokens.len(), layout);
        changed
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Tokens of page `index`
    pub fn page(&self, index: usize) -> Option<&[String]> {
        self.pages.get(index).map(|range| &self.tokens[range.clone()])
    }

    /// Distinct tokens, sorted
    pub fn vocabulary(&self) -> BTreeSet<&str> {
        self.tokens.iter().map(String::as_str).collect()
    }

    /// Name for the title bar
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .map(crate::util::display_name)
            .unwrap_or_else(|| "Untitled".to_string())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}
