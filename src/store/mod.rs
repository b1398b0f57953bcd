//! Persistent per-language proficiency records
//!
//! Each language key owns one record stored as a flat JSON object at
//! `<languages dir>/<language>/words.json`. Every mutation rewrites the
//! whole record (write-through) through an atomic temp-file rename.

mod level;
mod record;

pub use level::Level;
pub use record::ProficiencyRecord;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::util::write_atomic;

/// File name of a language's record
pub const RECORD_FILE: &str = "words.json";
/// Suffix a malformed record is moved to before it is replaced
pub const CORRUPT_SUFFIX: &str = "corrupt";

/// Errors surfaced by durable-storage operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The record file exists but could not be read
    Read { path: PathBuf, message: String },
    /// The snapshot could not be written; the previous file is intact
    Write { path: PathBuf, message: String },
    /// The record could not be serialized
    Serialize(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, message } => {
                write!(f, "failed to read {}: {}", path.display(), message)
            }
            Self::Write { path, message } => {
                write!(f, "failed to write {}: {}", path.display(), message)
            }
            Self::Serialize(message) => write!(f, "failed to serialize record: {}", message),
        }
    }
}

impl std::error::Error for StoreError {}

/// Loaded records, keyed by language, backed by the languages directory
#[derive(Debug)]
pub struct ProficiencyStore {
    root: PathBuf,
    records: HashMap<String, ProficiencyRecord>,
}

impl ProficiencyStore {
    /// A store whose records live below `root` (one directory per language)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            records: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<language>/words.json`
    pub fn record_path(&self, language: &str) -> PathBuf {
        self.root.join(language).join(RECORD_FILE)
    }

    /// Load the record for `language` and make sure it covers `vocabulary`
    ///
    /// A missing (or malformed) record is seeded from the vocabulary with
    /// every word at [`Level::Ignore`] and persisted immediately. An existing
    /// record gains the words it has not seen yet, and is persisted if any
    /// were added.
    pub fn load<'a>(
        &mut self,
        language: &str,
        vocabulary: impl IntoIterator<Item = &'a str>,
    ) -> Result<&ProficiencyRecord, StoreError> {
        let path = self.record_path(language);
        let (mut record, existed) = match self.records.remove(language) {
            Some(record) => (record, true),
            None => match read_record(&path)? {
                Some(record) => (record, true),
                None => (ProficiencyRecord::new(), false),
            },
        };

        let added = record.extend_with(vocabulary);
        if !existed || added > 0 {
            if let Err(e) = persist(&path, &record) {
                // Keep whatever was already on disk as the in-memory truth
                if existed {
                    if let Ok(Some(on_disk)) = read_record(&path) {
                        self.records.insert(language.to_string(), on_disk);
                    }
                }
                return Err(e);
            }
            if existed {
                tracing::debug!("Added {} new words to the {} record", added, language);
            } else {
                tracing::info!(
                    "Created {} record with {} words at {}",
                    language,
                    record.len(),
                    path.display()
                );
            }
        }

        Ok(self.records.entry(language.to_string()).or_insert(record))
    }

    /// Load the record for `language` without seeding or writing anything
    ///
    /// An absent record loads as empty.
    pub fn load_existing(&mut self, language: &str) -> Result<&ProficiencyRecord, StoreError> {
        if !self.records.contains_key(language) {
            let record = read_record(&self.record_path(language))?.unwrap_or_default();
            self.records.insert(language.to_string(), record);
        }
        Ok(&self.records[language])
    }

    /// Rate `word` and write the whole record through to disk
    ///
    /// If the write fails the in-memory entry is rolled back, so memory and
    /// disk never disagree about a rating.
    pub fn set_level(&mut self, language: &str, word: &str, level: Level) -> Result<(), StoreError> {
        self.load_existing(language)?;
        let path = self.record_path(language);
        let Some(record) = self.records.get_mut(language) else {
            return Ok(());
        };

        let previous = record.set(word, level);
        match persist(&path, record) {
            Ok(()) => {
                tracing::debug!("{}: {:?} -> {}", language, word, level);
                Ok(())
            }
            Err(e) => {
                record.restore(word, previous);
                tracing::error!("Rating {:?} was not saved: {}", word, e);
                Err(e)
            }
        }
    }

    /// Level of `word`; Ignore when unrated or the language is not loaded
    pub fn get_level(&self, language: &str, word: &str) -> Level {
        self.records
            .get(language)
            .map(|record| record.level_of(word))
            .unwrap_or_default()
    }

    /// A loaded record
    pub fn record(&self, language: &str) -> Option<&ProficiencyRecord> {
        self.records.get(language)
    }

    /// Drop the cached record so the next load re-reads the disk
    pub fn forget(&mut self, language: &str) {
        self.records.remove(language);
    }
}

fn persist(path: &Path, record: &ProficiencyRecord) -> Result<(), StoreError> {
    let json = record
        .to_json()
        .map_err(|e| StoreError::Serialize(e.to_string()))?;
    write_atomic(path, json.as_bytes()).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read a stored record
///
/// `Ok(None)` when there is no record, or when the stored one was malformed
/// (it is moved aside to `words.json.corrupt` so it is not overwritten).
fn read_record(path: &Path) -> Result<Option<ProficiencyRecord>, StoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
    };

    match ProficiencyRecord::from_json(&contents) {
        Ok(record) => {
            tracing::debug!("Loaded {} words from {}", record.len(), path.display());
            Ok(Some(record))
        }
        Err(e) => {
            let aside = path.with_extension(format!("json.{}", CORRUPT_SUFFIX));
            tracing::warn!(
                "Malformed record at {}: {}; moving it to {}",
                path.display(),
                e,
                aside.display()
            );
            fs::rename(path, &aside).map_err(|e| StoreError::Write {
                path: aside.clone(),
                message: e.to_string(),
            })?;
            Ok(None)
        }
    }
}
