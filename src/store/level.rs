//! Proficiency levels

use serde::{Deserialize, Serialize};

/// How well the reader knows a word. Persisted as its integer value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    /// Not studied (names, numbers, words the reader does not care about)
    #[default]
    Ignore = 0,
    Unknown = 1,
    Partial = 2,
    Known = 3,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Ignore, Level::Unknown, Level::Partial, Level::Known];

    /// Level for a rating key ('0'..='3')
    pub fn from_digit(ch: char) -> Option<Self> {
        ch.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(|d| Self::try_from(d).ok())
    }

    /// Whether words at this level belong in the flashcard export
    #[inline]
    pub fn is_studied(self) -> bool {
        matches!(self, Level::Unknown | Level::Partial)
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Ignore => "ignored",
            Level::Unknown => "unknown",
            Level::Partial => "partially known",
            Level::Known => "known",
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Level::Ignore),
            1 => Ok(Level::Unknown),
            2 => Ok(Level::Partial),
            3 => Ok(Level::Known),
            other => Err(format!("invalid proficiency level {}", other)),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level as u8
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_digit() {
        assert_eq!(Level::from_digit('0'), Some(Level::Ignore));
        assert_eq!(Level::from_digit('3'), Some(Level::Known));
        assert_eq!(Level::from_digit('4'), None);
        assert_eq!(Level::from_digit('x'), None);
    }

    #[test]
    fn test_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Level::Partial).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Level>("1").unwrap(), Level::Unknown);
        assert!(serde_json::from_str::<Level>("7").is_err());
    }

    #[test]
    fn test_studied_levels() {
        let studied: Vec<Level> = Level::ALL.into_iter().filter(|l| l.is_studied()).collect();
        assert_eq!(studied, vec![Level::Unknown, Level::Partial]);
    }
}
