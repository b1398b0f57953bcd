//! External collaborators: terminal metrics, translation, pronunciation, browser
//!
//! Every collaborator sits behind a small trait so the engine can be driven
//! with fakes in tests. Failures surface as [`ServiceError`] values; nothing
//! past this module deals in sentinel strings.

pub mod audio;
pub mod browser;
pub mod metrics;
pub mod translator;

pub use audio::{AudioPlayer, SoundOfText};
pub use browser::{stroke_order_url, web_translator_url, Browser, SystemBrowser};
pub use metrics::{
    layout_for, lines_per_page_for, words_per_line_for, FixedMetrics, TerminalMetrics,
    ViewportMetrics,
};
pub use translator::{MyMemoryTranslator, Translator};

/// Errors reported by collaborators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request could not be sent or the connection failed
    Http(String),
    /// The request took longer than the configured timeout
    Timeout,
    /// The service answered with a non-success status
    Status(u16),
    /// The service answered, but not with anything usable
    Response(String),
    /// Local file handling failed
    Io(String),
    /// The external audio player failed
    Player(String),
    /// A collaborator reported failure through a message string
    Reported(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(msg) => write!(f, "request failed: {}", msg),
            Self::Timeout => write!(f, "request timed out"),
            Self::Status(code) => write!(f, "unexpected status code {}", code),
            Self::Response(msg) => write!(f, "unusable response: {}", msg),
            Self::Io(msg) => write!(f, "{}", msg),
            Self::Player(msg) => write!(f, "audio player: {}", msg),
            Self::Reported(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if let Some(status) = e.status() {
            Self::Status(status.as_u16())
        } else if e.is_decode() {
            Self::Response(e.to_string())
        } else {
            Self::Http(e.to_string())
        }
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// Convert an "empty message means success" report into a `Result`
pub fn from_sentinel(message: &str) -> Result<(), ServiceError> {
    let message = message.trim();
    if message.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Reported(message.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sentinel() {
        assert_eq!(from_sentinel(""), Ok(()));
        assert_eq!(from_sentinel("  \n"), Ok(()));
        assert_eq!(
            from_sentinel("QUOTA EXCEEDED"),
            Err(ServiceError::Reported("QUOTA EXCEEDED".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ServiceError::Status(503).to_string(), "unexpected status code 503");
        assert_eq!(ServiceError::Timeout.to_string(), "request timed out");
    }
}
