//! Status line state: the last translation and an auto-expiring message

use std::time::{Duration, Instant};

/// How long info messages stay on screen
pub const INFO_DURATION: Duration = Duration::from_secs(4);
/// How long error messages stay on screen
pub const ERROR_DURATION: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

// =============================================================================
// Transient Message
// =============================================================================

/// A status message that auto-expires
#[derive(Debug, Clone)]
pub struct TransientMessage {
    pub text: String,
    pub kind: MessageKind,
    pub expires_at: Instant,
}

impl TransientMessage {
    pub fn new(text: impl Into<String>, kind: MessageKind, duration: Duration) -> Self {
        Self {
            text: text.into(),
            kind,
            expires_at: Instant::now() + duration,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Info, INFO_DURATION)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Error, ERROR_DURATION)
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

// =============================================================================
// Status line
// =============================================================================

/// A word and its translation, shown until the next translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub word: String,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    pub message: Option<TransientMessage>,
    pub translation: Option<Translation>,
}

impl StatusLine {
    pub fn info(&mut self, text: impl Into<String>) {
        self.message = Some(TransientMessage::info(text));
    }

    pub fn error(&mut self, text: impl Into<String>) {
        let message = TransientMessage::error(text);
        tracing::warn!("{}", message.text);
        self.message = Some(message);
    }

    /// Drop an expired message; returns true when something was cleared
    pub fn clear_expired(&mut self) -> bool {
        if self.message.as_ref().is_some_and(TransientMessage::is_expired) {
            self.message = None;
            true
        } else {
            false
        }
    }

    /// Text of the current message, if any
    pub fn text(&self) -> Option<&str> {
        self.message.as_ref().map(|m| m.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_message_is_cleared() {
        let mut status = StatusLine::default();
        status.message = Some(TransientMessage::new("old", MessageKind::Info, Duration::ZERO));
        assert!(status.clear_expired());
        assert_eq!(status.text(), None);
    }

    #[test]
    fn test_fresh_message_survives() {
        let mut status = StatusLine::default();
        status.error("network down");
        assert!(!status.clear_expired());
        assert_eq!(status.text(), Some("network down"));
        assert!(status.message.as_ref().unwrap().is_error());
    }
}
