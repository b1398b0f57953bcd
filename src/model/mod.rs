//! Application model - the complete state of the reader
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod cursor;
pub mod document;
pub mod menu;
pub mod pagination;
pub mod status;

pub use cursor::NavigationCursor;
pub use document::Document;
pub use menu::Menu;
pub use pagination::{paginate, paginate_len, PageLayout};
pub use status::{MessageKind, StatusLine, TransientMessage, Translation};

use std::path::{Path, PathBuf};

use crate::config::ReaderConfig;
use crate::language::LanguageKey;
use crate::library::Library;
use crate::services::metrics::{layout_for, UNKNOWN_SIZE};
use crate::store::{Level, ProficiencyStore};

/// Which screen has the keyboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    LanguageSelect,
    TextSelect,
    Reading,
}

impl Screen {
    pub fn label(self) -> &'static str {
        match self {
            Screen::LanguageSelect => "languages",
            Screen::TextSelect => "texts",
            Screen::Reading => "reading",
        }
    }
}

/// The open document and the reading position in it
#[derive(Debug, Clone, Default)]
pub struct ReadingState {
    pub document: Document,
    pub cursor: NavigationCursor,
}

impl ReadingState {
    /// Token under the cursor
    pub fn current_word(&self) -> Option<&str> {
        self.document.token(self.cursor.token_index())
    }

    /// Tokens of the shown page with their absolute indices
    pub fn visible_tokens(&self) -> impl Iterator<Item = (usize, &str)> {
        let range = self
            .document
            .pages
            .get(self.cursor.page_index())
            .cloned()
            .unwrap_or(0..0);
        range
            .clone()
            .zip(self.document.tokens[range].iter().map(String::as_str))
    }
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    pub screen: Screen,
    pub library: Library,
    pub config: ReaderConfig,
    /// Proficiency records of every language touched this session
    pub store: ProficiencyStore,
    /// Language chosen on the language screen
    pub language: Option<LanguageKey>,
    pub language_menu: Menu<String>,
    pub text_menu: Menu<PathBuf>,
    pub reader: ReadingState,
    /// Viewport in cells; `(-1, -1)` while unknown
    pub viewport: (i32, i32),
    pub status: StatusLine,
    pub should_quit: bool,
}

impl AppModel {
    /// A model on the language screen, listing the library's languages
    pub fn new(library: Library, config: ReaderConfig) -> Self {
        let store = ProficiencyStore::new(library.languages_dir());
        let mut model = Self {
            screen: Screen::LanguageSelect,
            library,
            config,
            store,
            language: None,
            language_menu: Menu::default(),
            text_menu: Menu::default(),
            reader: ReadingState::default(),
            viewport: UNKNOWN_SIZE,
            status: StatusLine::default(),
            should_quit: false,
        };
        model.refresh_languages();
        model
    }

    /// Page layout for the current viewport
    pub fn layout(&self) -> PageLayout {
        layout_for(self.viewport.0, self.viewport.1)
    }

    /// Re-read the language directories
    pub fn refresh_languages(&mut self) {
        match self.library.languages() {
            Ok(languages) => {
                if languages.is_empty() {
                    self.status.info(format!(
                        "No languages in {}",
                        self.library.languages_dir().display()
                    ));
                }
                self.language_menu = Menu::new(languages);
            }
            Err(e) => {
                self.language_menu = Menu::default();
                self.status.error(format!("Cannot list languages: {}", e));
            }
        }
    }

    /// Choose the studied language and show its text menu
    pub fn choose_language(&mut self, name: &str) {
        let key = LanguageKey::new(name);
        tracing::info!("Studying {} ({})", key, key.script().label());
        self.language_menu.select(&name.to_string());
        self.language = Some(key);

        match self.library.texts() {
            Ok(texts) => {
                if texts.is_empty() {
                    self.status.info(format!(
                        "No texts in {}",
                        self.library.texts_dir().display()
                    ));
                }
                self.text_menu = Menu::new(texts);
            }
            Err(e) => {
                self.text_menu = Menu::default();
                self.status.error(format!("Cannot list texts: {}", e));
            }
        }
        self.screen = Screen::TextSelect;
    }

    /// Open `path` in the reading screen
    ///
    /// Blank texts open as the placeholder document. The language's record is
    /// loaded and extended with the document's words; a storage failure is
    /// reported but the document still opens.
    pub fn open_text(&mut self, path: &Path) {
        let Some(language) = self.language.clone() else {
            self.status.error("Choose a language first");
            return;
        };

        let text = match self.library.read_text(path) {
            Ok(text) => text,
            Err(e) => {
                let name = crate::util::display_name(path);
                self.status.error(e.describe(&name));
                return;
            }
        };

        let document =
            Document::open(&text, language.script(), self.layout()).with_path(path.to_path_buf());

        if !document.is_placeholder {
            if let Err(e) = self.store.load(language.name(), document.vocabulary()) {
                self.status.error(format!("Progress will not be saved: {}", e));
            }
        }

        tracing::info!(
            "Opened {} ({} tokens, {} pages)",
            path.display(),
            document.len(),
            document.page_count()
        );
        self.reader = ReadingState {
            cursor: NavigationCursor::at(&document, 0),
            document,
        };
        self.screen = Screen::Reading;
    }

    /// Apply a new viewport size: repaginate and move the page to the cursor
    pub fn resize(&mut self, width: i32, height: i32) -> bool {
        self.viewport = (width, height);
        let layout = self.layout();
        let changed = self.reader.document.repaginate(layout);
        self.reader.cursor.sync(&self.reader.document);
        changed
    }

    /// Level of the word under the cursor
    pub fn current_level(&self) -> Level {
        match (&self.language, self.reader.current_word()) {
            (Some(language), Some(word)) => self.store.get_level(language.name(), word),
            _ => Level::Ignore,
        }
    }

    /// Level of `word` in the current language
    pub fn level_of(&self, word: &str) -> Level {
        self.language
            .as_ref()
            .map(|language| self.store.get_level(language.name(), word))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn library(text: &str) -> (TempDir, Library) {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("languages/latin")).unwrap();
        fs::create_dir_all(dir.path().join("texts")).unwrap();
        fs::write(dir.path().join("texts/a.txt"), text).unwrap();
        let library = Library::new(dir.path());
        (dir, library)
    }

    #[test]
    fn test_new_lists_languages() {
        let (_dir, library) = library("x");
        let model = AppModel::new(library, ReaderConfig::default());
        assert_eq!(model.screen, Screen::LanguageSelect);
        assert_eq!(model.language_menu.items(), &["latin".to_string()]);
    }

    #[test]
    fn test_open_text_seeds_record() {
        let (dir, library) = library("arma virumque cano");
        let mut model = AppModel::new(library, ReaderConfig::default());
        model.choose_language("latin");
        model.open_text(&dir.path().join("texts/a.txt"));

        assert_eq!(model.screen, Screen::Reading);
        assert_eq!(model.reader.current_word(), Some("arma"));
        assert!(dir.path().join("languages/latin/words.json").exists());
    }

    #[test]
    fn test_blank_text_opens_placeholder_without_record() {
        let (dir, library) = library("  \n\t ");
        let mut model = AppModel::new(library, ReaderConfig::default());
        model.choose_language("latin");
        model.open_text(&dir.path().join("texts/a.txt"));

        assert!(model.reader.document.is_placeholder);
        assert_eq!(model.reader.current_word(), Some(Document::PLACEHOLDER_TEXT));
        assert!(!dir.path().join("languages/latin/words.json").exists());
    }

    #[test]
    fn test_resize_keeps_token_and_moves_page() {
        let words: Vec<String> = (0..200).map(|i| format!("w{}", i)).collect();
        let (dir, library) = library(&words.join(" "));
        let mut model = AppModel::new(library, ReaderConfig::default());
        model.choose_language("latin");
        model.open_text(&dir.path().join("texts/a.txt"));

        model.reader.cursor = NavigationCursor::at(&model.reader.document, 30);
        assert_eq!(model.reader.cursor.page_index(), 1);

        model.resize(80, 24);
        assert_eq!(model.reader.cursor.token_index(), 30);
        assert_eq!(model.reader.cursor.page_index(), 0);
    }
}
