//! Viewport-driven pagination
//!
//! Pages are half-open token index ranges. They partition the token list
//! with no gaps, no overlaps and no empty pages.

use std::ops::Range;

/// Words per line and lines per page, as derived from the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub words_per_line: usize,
    pub lines_per_page: usize,
}

impl PageLayout {
    /// Create a layout. Zero values are raised to 1.
    pub fn new(words_per_line: usize, lines_per_page: usize) -> Self {
        Self {
            words_per_line: words_per_line.max(1),
            lines_per_page: lines_per_page.max(1),
        }
    }

    /// Tokens per page (always at least 1)
    #[inline]
    pub fn page_size(&self) -> usize {
        self.words_per_line.max(1) * self.lines_per_page.max(1)
    }

    /// Index of the page containing `token_index`
    #[inline]
    pub fn page_of(&self, token_index: usize) -> usize {
        token_index / self.page_size()
    }
}

impl Default for PageLayout {
    /// Smallest layout the terminal metrics ever produce
    fn default() -> Self {
        Self::new(5, 5)
    }
}

/// Partition `tokens` into pages of `words_per_line * lines_per_page` tokens
///
/// Full pages come first, followed by one page with the remainder. When the
/// remainder is zero no trailing page is produced; an empty token list has
/// no pages at all.
pub fn paginate<T>(tokens: &[T], words_per_line: usize, lines_per_page: usize) -> Vec<Range<usize>> {
    paginate_len(tokens.len(), PageLayout::new(words_per_line, lines_per_page))
}

/// [`paginate`] for callers that only know the token count
pub fn paginate_len(len: usize, layout: PageLayout) -> Vec<Range<usize>> {
    let size = layout.page_size();
    (0..len)
        .step_by(size)
        .map(|start| start..(start + size).min(len))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("w{}", i)).collect()
    }

    #[test]
    fn test_page_size_is_product() {
        assert_eq!(PageLayout::new(3, 4).page_size(), 12);
    }

    #[test]
    fn test_zero_layout_clamps_to_one() {
        let layout = PageLayout::new(0, 0);
        assert_eq!(layout.page_size(), 1);
        assert_eq!(paginate(&tokens(3), 0, 0), vec![0..1, 1..2, 2..3]);
    }

    #[test]
    fn test_remainder_page() {
        assert_eq!(paginate(&tokens(7), 3, 1), vec![0..3, 3..6, 6..7]);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_empty_page() {
        assert_eq!(paginate(&tokens(6), 3, 1), vec![0..3, 3..6]);
    }

    #[test]
    fn test_empty_document_has_no_pages() {
        assert!(paginate(&tokens(0), 3, 1).is_empty());
    }

    #[test]
    fn test_fewer_tokens_than_page() {
        assert_eq!(paginate(&tokens(2), 5, 5), vec![0..2]);
    }

    #[test]
    fn test_page_count_and_sizes() {
        for n in 1..60 {
            for p in 1..9 {
                let pages = paginate(&tokens(n), p, 1);
                assert_eq!(pages.len(), n.div_ceil(p), "n={} p={}", n, p);

                let mut expected_start = 0;
                for (i, page) in pages.iter().enumerate() {
                    assert_eq!(page.start, expected_start);
                    assert!(!page.is_empty());
                    if i + 1 < pages.len() {
                        assert_eq!(page.len(), p);
                    }
                    expected_start = page.end;
                }
                assert_eq!(expected_start, n);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let t = tokens(23);
        assert_eq!(paginate(&t, 4, 2), paginate(&t, 4, 2));
    }

    #[test]
    fn test_page_of() {
        let layout = PageLayout::new(3, 1);
        assert_eq!(layout.page_of(0), 0);
        assert_eq!(layout.page_of(2), 0);
        assert_eq!(layout.page_of(3), 1);
    }
}
