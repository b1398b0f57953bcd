//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

use lingo::config::ReaderConfig;
use lingo::input::key_to_msg;
use lingo::library::Library;
use lingo::model::AppModel;
use lingo::runtime::{dispatch, Services};
use lingo::services::{AudioPlayer, Browser, ServiceError, Translator};

/// Terminal size whose layout is 5 words x 5 lines (25 tokens per page)
pub const SMALL_TERMINAL: (i32, i32) = (40, 10);

/// `count` distinct space-separated words: "w0 w1 w2 ..."
pub fn numbered_words(count: usize) -> String {
    (0..count)
        .map(|i| format!("w{}", i))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A library in a temp dir with the given language directories and texts
pub fn test_library(languages: &[&str], texts: &[(&str, &str)]) -> (TempDir, Library) {
    let dir = TempDir::new().unwrap();
    let library = Library::new(dir.path());
    for language in languages {
        fs::create_dir_all(library.languages_dir().join(language)).unwrap();
    }
    fs::create_dir_all(library.texts_dir()).unwrap();
    for (name, text) in texts {
        let path = library.texts_dir().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, text).unwrap();
    }
    (dir, library)
}

/// A model on the language screen of a fresh library
pub fn test_model(languages: &[&str], texts: &[(&str, &str)]) -> (TempDir, AppModel) {
    let (dir, library) = test_library(languages, texts);
    let mut model = AppModel::new(library, ReaderConfig::default());
    model.resize(SMALL_TERMINAL.0, SMALL_TERMINAL.1);
    (dir, model)
}

/// A model reading `text` as `language` on a small terminal
pub fn reading_model(language: &str, text: &str) -> (TempDir, AppModel) {
    let (dir, mut model) = test_model(&[language], &[("text.txt", text)]);
    model.choose_language(language);
    let path = text_path(&model, "text.txt");
    model.open_text(&path);
    (dir, model)
}

pub fn text_path(model: &AppModel, name: &str) -> PathBuf {
    model.library.texts_dir().join(name)
}

/// The word under the reading cursor
pub fn current_word(model: &AppModel) -> &str {
    model.reader.current_word().unwrap_or_default()
}

/// Feed key presses through the input mapping and the runtime
pub fn press(model: &mut AppModel, services: &Services, codes: &[KeyCode]) {
    for &code in codes {
        if let Some(msg) = key_to_msg(model.screen, KeyEvent::new(code, KeyModifiers::NONE)) {
            dispatch(model, services, msg);
        }
    }
}

/// Shorthand for a sequence of character keys
pub fn chars(keys: &str) -> Vec<KeyCode> {
    keys.chars().map(KeyCode::Char).collect()
}

// ========================================================================
// Fake collaborators
// ========================================================================

/// Calls observed by the fake services
#[derive(Debug, Default)]
pub struct Calls {
    /// `(word, source, target)`
    pub translations: Vec<(String, String, String)>,
    /// `(word, voice)`
    pub fetches: Vec<(String, String)>,
    pub played: Vec<PathBuf>,
    pub deleted: Vec<PathBuf>,
    pub opened: Vec<String>,
}

pub type SharedCalls = Rc<RefCell<Calls>>;

/// Uppercases words; fails for the words listed in `failing`
pub struct FakeTranslator {
    pub calls: SharedCalls,
    pub failing: Vec<String>,
}

impl Translator for FakeTranslator {
    fn translate(&self, word: &str, source: &str, target: &str) -> Result<String, ServiceError> {
        self.calls.borrow_mut().translations.push((
            word.to_string(),
            source.to_string(),
            target.to_string(),
        ));
        if self.failing.iter().any(|w| w == word) {
            return Err(ServiceError::Reported("no match".to_string()));
        }
        Ok(word.to_uppercase())
    }
}

/// Pretends to download into `/audio`; playback fails when `broken`
pub struct FakeAudio {
    pub calls: SharedCalls,
    pub broken: bool,
}

impl AudioPlayer for FakeAudio {
    fn fetch(&self, word: &str, voice: &str) -> Result<PathBuf, ServiceError> {
        self.calls
            .borrow_mut()
            .fetches
            .push((word.to_string(), voice.to_string()));
        Ok(Path::new("/audio").join(format!("{}.mp3", word)))
    }

    fn play(&self, path: &Path) -> Result<(), ServiceError> {
        self.calls.borrow_mut().played.push(path.to_path_buf());
        if self.broken {
            return Err(ServiceError::Player("exit status 1".to_string()));
        }
        Ok(())
    }

    fn delete(&self, path: &Path) -> Result<(), ServiceError> {
        self.calls.borrow_mut().deleted.push(path.to_path_buf());
        Ok(())
    }
}

pub struct FakeBrowser {
    pub calls: SharedCalls,
}

impl Browser for FakeBrowser {
    fn open(&self, url: &str) -> Result<(), ServiceError> {
        self.calls.borrow_mut().opened.push(url.to_string());
        Ok(())
    }
}

/// Services backed by fakes that record into the returned call log
pub fn fake_services() -> (Services, SharedCalls) {
    fake_services_with(Vec::new(), false)
}

/// [`fake_services`] with translations failing for `failing` words and
/// optionally broken audio playback
pub fn fake_services_with(failing: Vec<String>, broken_audio: bool) -> (Services, SharedCalls) {
    let calls = SharedCalls::default();
    let services = Services {
        translator: Box::new(FakeTranslator {
            calls: Rc::clone(&calls),
            failing,
        }),
        audio: Box::new(FakeAudio {
            calls: Rc::clone(&calls),
            broken: broken_audio,
        }),
        browser: Box::new(FakeBrowser {
            calls: Rc::clone(&calls),
        }),
    };
    (services, calls)
}
