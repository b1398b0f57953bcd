//! Tracing infrastructure: console and rolling-file logging
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=navigation=debug` - cursor/page diffs only
//! - `RUST_LOG=lingo::store=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/lingo/logs/lingo.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::AppModel;

/// Initialize tracing with file logging and, optionally, console logging
///
/// The console layer writes to stderr and respects RUST_LOG (default `warn`).
/// Pass `console = false` while the terminal UI owns the screen.
pub fn init(console: bool) {
    let console_layer = console.then(|| {
        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_line_number(true)
            .with_filter(console_filter)
    });

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            if console {
                eprintln!("Warning: Could not initialize file logging: {}", e);
            }
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Reading position captured before and after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub screen: &'static str,
    pub token_index: usize,
    pub page_index: usize,
    pub page_count: usize,
    pub words_per_line: usize,
    pub lines_per_page: usize,
}

impl NavigationSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        let doc = &model.reader.document;
        Self {
            screen: model.screen.label(),
            token_index: model.reader.cursor.token_index(),
            page_index: model.reader.cursor.page_index(),
            page_count: doc.page_count(),
            words_per_line: doc.layout.words_per_line,
            lines_per_page: doc.layout.lines_per_page,
        }
    }

    /// Describe what changed, or None when nothing did
    pub fn diff(&self, other: &NavigationSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.screen != other.screen {
            changes.push(format!("screen: {} → {}", self.screen, other.screen));
        }
        if self.token_index != other.token_index {
            changes.push(format!("token: {} → {}", self.token_index, other.token_index));
        }
        if self.page_index != other.page_index || self.page_count != other.page_count {
            changes.push(format!(
                "page: {}/{} → {}/{}",
                self.page_index + 1,
                self.page_count,
                other.page_index + 1,
                other.page_count
            ));
        }
        if (self.words_per_line, self.lines_per_page) != (other.words_per_line, other.lines_per_page)
        {
            changes.push(format!(
                "layout: {}x{} → {}x{}",
                self.words_per_line, self.lines_per_page, other.words_per_line, other.lines_per_page
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
