//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::services::ServiceError;
use crate::store::Level;

/// Direction of a step through tokens, lines, pages or menu items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    #[inline]
    pub fn delta(self) -> isize {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

/// Cursor movement on the reading screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMsg {
    /// One token (h/l)
    MoveToken(Direction),
    /// One visual line (k/j)
    MoveLine(Direction),
    /// Flip the page and put the cursor on its first token (a/d)
    FlipPage(Direction),
    /// First token of the shown page (m)
    PageStart,
    /// First token of the document (Home)
    DocumentStart,
    /// Last token of the document (End)
    DocumentEnd,
}

/// Menu screens (languages, texts)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMsg {
    Move(Direction),
    /// Choose the highlighted item (Enter)
    Select,
}

/// Requests to collaborators and their completions
#[derive(Debug, Clone)]
pub enum ServiceMsg {
    /// Speak the word under the cursor
    Pronounce,
    /// Translate the word under the cursor
    Translate,
    /// Open the stroke-order page for the word under the cursor
    StrokeOrder,
    /// Open the web translator for the word under the cursor
    WebTranslate,
    /// Write the current language's dictionary file
    ExportDictionary,

    // === Completions ===
    Translated {
        word: String,
        result: Result<String, ServiceError>,
    },
    Pronounced {
        word: String,
        result: Result<(), ServiceError>,
    },
    UrlOpened(Result<(), ServiceError>),
    Exported {
        path: PathBuf,
        result: Result<String, String>,
    },
}

/// Application-level messages
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Viewport size in cells; `(-1, -1)` when unknown
    Resize(i32, i32),
    /// Periodic refresh (expires status messages)
    Tick,
    /// Return to the previous screen
    Back,
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Reading-screen cursor movement
    Nav(NavMsg),
    /// Rate the word under the cursor
    Rate(Level),
    /// Menu navigation
    Menu(MenuMsg),
    /// Translation, pronunciation, browser and export
    Service(ServiceMsg),
    /// Resize, tick, back, quit
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn move_token(direction: Direction) -> Self {
        Msg::Nav(NavMsg::MoveToken(direction))
    }

    pub fn flip_page(direction: Direction) -> Self {
        Msg::Nav(NavMsg::FlipPage(direction))
    }

    pub fn resize(width: i32, height: i32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }

    /// Periodic messages that are not worth logging
    pub fn is_noisy(&self) -> bool {
        matches!(self, Msg::App(AppMsg::Tick) | Msg::App(AppMsg::Resize(..)))
    }
}
