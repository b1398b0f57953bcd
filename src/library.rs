//! The on-disk library: studied languages and the texts to read
//!
//! ```text
//! <root>/
//!   languages/<language>/words.json       proficiency record
//!   languages/<language>/dictionary.txt   flashcard export
//!   texts/**                              documents to read
//!   audio/                                scratch space for pronunciations
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::util::{read_text_file, TextFileError};

pub const LANGUAGES_DIR: &str = "languages";
pub const TEXTS_DIR: &str = "texts";
pub const AUDIO_DIR: &str = "audio";
pub const DICTIONARY_FILE: &str = "dictionary.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    root: PathBuf,
}

impl Library {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn languages_dir(&self) -> PathBuf {
        self.root.join(LANGUAGES_DIR)
    }

    pub fn texts_dir(&self) -> PathBuf {
        self.root.join(TEXTS_DIR)
    }

    pub fn audio_dir(&self) -> PathBuf {
        self.root.join(AUDIO_DIR)
    }

    /// `<root>/languages/<language>/dictionary.txt`
    pub fn dictionary_path(&self, language: &str) -> PathBuf {
        self.languages_dir().join(language).join(DICTIONARY_FILE)
    }

    /// Names of the language directories, sorted
    ///
    /// A missing `languages/` directory lists as empty.
    pub fn languages(&self) -> io::Result<Vec<String>> {
        let dir = self.languages_dir();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("No languages directory at {}", dir.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if !is_hidden(&name) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    /// Every file below `texts/`, recursively, sorted by path
    pub fn texts(&self) -> io::Result<Vec<PathBuf>> {
        let dir = self.texts_dir();
        let mut files = Vec::new();
        match collect_files(&dir, &mut files) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("No texts directory at {}", dir.display());
            }
            other => other?,
        }
        files.sort();
        Ok(files)
    }

    /// Read a document's raw text
    pub fn read_text(&self, path: &Path) -> Result<String, TextFileError> {
        read_text_file(path)
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if is_hidden(&entry.file_name().to_string_lossy()) {
            continue;
        }
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            collect_files(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn library_with(languages: &[&str], texts: &[&str]) -> (TempDir, Library) {
        let dir = TempDir::new().unwrap();
        for lang in languages {
            fs::create_dir_all(dir.path().join(LANGUAGES_DIR).join(lang)).unwrap();
        }
        for text in texts {
            let path = dir.path().join(TEXTS_DIR).join(text);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "lorem ipsum").unwrap();
        }
        let library = Library::new(dir.path());
        (dir, library)
    }

    #[test]
    fn test_paths() {
        let library = Library::new("/srv/lingo");
        assert_eq!(
            library.dictionary_path("latin"),
            PathBuf::from("/srv/lingo/languages/latin/dictionary.txt")
        );
    }

    #[test]
    fn test_languages_sorted_dirs_only() {
        let (dir, library) = library_with(&["russian", "chinese", ".git"], &[]);
        fs::write(dir.path().join(LANGUAGES_DIR).join("notes.txt"), "x").unwrap();

        assert_eq!(library.languages().unwrap(), vec!["chinese", "russian"]);
    }

    #[test]
    fn test_texts_recursive_sorted() {
        let (dir, library) = library_with(&[], &["b.txt", "a/z.txt", "a/c.txt"]);
        let texts = library.texts().unwrap();
        let expected: Vec<PathBuf> = ["a/c.txt", "a/z.txt", "b.txt"]
            .iter()
            .map(|p| dir.path().join(TEXTS_DIR).join(p))
            .collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn test_missing_dirs_list_empty() {
        let dir = TempDir::new().unwrap();
        let library = Library::new(dir.path());
        assert!(library.languages().unwrap().is_empty());
        assert!(library.texts().unwrap().is_empty());
    }

    #[test]
    fn test_read_text() {
        let (dir, library) = library_with(&[], &["a.txt"]);
        let path = dir.path().join(TEXTS_DIR).join("a.txt");
        assert_eq!(library.read_text(&path).unwrap(), "lorem ipsum");
        assert!(matches!(
            library.read_text(&dir.path().join("missing.txt")),
            Err(TextFileError::Missing)
        ));
    }
}
