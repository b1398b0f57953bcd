//! Viewport metrics - how many words fit on a line and lines on a page
//!
//! The layout is chosen from coarse width/height brackets rather than measured
//! glyph widths, so a page always looks the same for a given terminal size.

use crate::model::PageLayout;

/// Size reported when the terminal cannot be queried
pub const UNKNOWN_SIZE: (i32, i32) = (-1, -1);

/// Words per line for a terminal `width` in columns
pub fn words_per_line_for(width: i32) -> usize {
    match width {
        w if w < 50 => 5,
        w if w < 80 => 7,
        w if w < 100 => 10,
        _ => 15,
    }
}

/// Lines per page for a terminal `height` in rows
pub fn lines_per_page_for(height: i32) -> usize {
    match height {
        h if h < 12 => 5,
        h if h < 20 => 8,
        h if h < 25 => 12,
        h if h < 30 => 15,
        h if h < 40 => 20,
        h if h < 50 => 25,
        _ => 28,
    }
}

/// Page layout for a terminal of `width` x `height`
pub fn layout_for(width: i32, height: i32) -> PageLayout {
    PageLayout::new(words_per_line_for(width), lines_per_page_for(height))
}

/// Source of the current viewport size
pub trait ViewportMetrics {
    /// `(width, height)` in cells, or [`UNKNOWN_SIZE`] when unavailable
    fn size(&self) -> (i32, i32);

    fn words_per_line(&self) -> usize {
        words_per_line_for(self.size().0)
    }

    fn lines_per_page(&self) -> usize {
        lines_per_page_for(self.size().1)
    }

    fn layout(&self) -> PageLayout {
        PageLayout::new(self.words_per_line(), self.lines_per_page())
    }
}

/// Metrics of the controlling terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalMetrics;

impl ViewportMetrics for TerminalMetrics {
    fn size(&self) -> (i32, i32) {
        match crossterm::terminal::size() {
            Ok((width, height)) => (i32::from(width), i32::from(height)),
            Err(e) => {
                tracing::debug!("Terminal size unavailable: {}", e);
                UNKNOWN_SIZE
            }
        }
    }
}

/// A fixed viewport, for headless runs and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMetrics {
    pub width: i32,
    pub height: i32,
}

impl FixedMetrics {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl ViewportMetrics for FixedMetrics {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_per_line_brackets() {
        assert_eq!(words_per_line_for(49), 5);
        assert_eq!(words_per_line_for(50), 7);
        assert_eq!(words_per_line_for(79), 7);
        assert_eq!(words_per_line_for(80), 10);
        assert_eq!(words_per_line_for(99), 10);
        assert_eq!(words_per_line_for(100), 15);
        assert_eq!(words_per_line_for(400), 15);
    }

    #[test]
    fn test_lines_per_page_brackets() {
        let expected = [
            (11, 5),
            (12, 8),
            (19, 8),
            (20, 12),
            (25, 15),
            (30, 20),
            (40, 25),
            (49, 25),
            (50, 28),
        ];
        for (height, lines) in expected {
            assert_eq!(lines_per_page_for(height), lines, "height {}", height);
        }
    }

    #[test]
    fn test_unknown_size_gives_smallest_layout() {
        let metrics = FixedMetrics::new(UNKNOWN_SIZE.0, UNKNOWN_SIZE.1);
        assert_eq!(metrics.layout(), PageLayout::new(5, 5));
    }

    #[test]
    fn test_layout_for_typical_terminal() {
        let layout = FixedMetrics::new(80, 24).layout();
        assert_eq!(layout, PageLayout::new(10, 12));
        assert_eq!(layout.page_size(), 120);
    }
}
