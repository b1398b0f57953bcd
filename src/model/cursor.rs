//! Reading cursor - token position and the page being shown
//!
//! The token index is the single source of truth for the reading position.
//! The page index follows it: every repagination re-derives it from the token
//! index. The only way the two disagree is between a [`move_page`] and the
//! next [`jump_to_page_start`] or [`sync`].
//!
//! [`move_page`]: NavigationCursor::move_page
//! [`jump_to_page_start`]: NavigationCursor::jump_to_page_start
//! [`sync`]: NavigationCursor::sync

use super::document::Document;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationCursor {
    token_index: usize,
    page_index: usize,
}

impl NavigationCursor {
    /// Cursor on the first token of the first page
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor at `token_index`, clamped and synced to `doc`
    pub fn at(doc: &Document, token_index: usize) -> Self {
        let mut cursor = Self {
            token_index,
            page_index: 0,
        };
        cursor.sync(doc);
        cursor
    }

    #[inline]
    pub fn token_index(&self) -> usize {
        self.token_index
    }

    #[inline]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Move by `delta` tokens, clamped to the document
    pub fn move_token(&mut self, doc: &Document, delta: isize) {
        let Some(last) = doc.len().checked_sub(1) else {
            return;
        };
        self.token_index = self.token_index.saturating_add_signed(delta).min(last);
        self.page_index = doc.layout.page_of(self.token_index);
    }

    /// Move by `delta` visual lines
    ///
    /// A move that would land before the first or after the last token is
    /// refused and the cursor stays put.
    pub fn move_line(&mut self, doc: &Document, delta: isize) {
        let step = doc.layout.words_per_line as isize;
        let target = self.token_index as isize + delta * step;
        if target < 0 || target >= doc.len() as isize {
            return;
        }
        self.token_index = target as usize;
        self.page_index = doc.layout.page_of(self.token_index);
    }

    /// Flip the shown page by `delta`, clamped; the token index is untouched
    pub fn move_page(&mut self, doc: &Document, delta: isize) {
        let Some(last) = doc.page_count().checked_sub(1) else {
            return;
        };
        self.page_index = self.page_index.saturating_add_signed(delta).min(last);
    }

    /// Put the cursor on the first token of the shown page
    pub fn jump_to_page_start(&mut self, doc: &Document) {
        if let Some(page) = doc.pages.get(self.page_index) {
            self.token_index = page.start;
        }
    }

    pub fn jump_to_start(&mut self, doc: &Document) {
        self.token_index = 0;
        self.sync(doc);
    }

    pub fn jump_to_end(&mut self, doc: &Document) {
        self.token_index = doc.len().saturating_sub(1);
        self.sync(doc);
    }

    /// Clamp the token index to `doc` and re-derive the page index from it
    ///
    /// Called after every repagination.
    pub fn sync(&mut self, doc: &Document) {
        if doc.is_empty() {
            self.token_index = 0;
            self.page_index = 0;
            return;
        }
        self.token_index = self.token_index.min(doc.len() - 1);
        self.page_index = doc.layout.page_of(self.token_index);
    }

    /// Whether the page index is derived from the token index
    pub fn is_synced(&self, doc: &Document) -> bool {
        if doc.is_empty() {
            return self.token_index == 0 && self.page_index == 0;
        }
        doc.pages
            .get(self.page_index)
            .is_some_and(|page| page.contains(&self.token_index))
    }
}
