//! Flashcard ("dictionary") export
//!
//! Lists every word still being learned (rated Unknown or Partial) with its
//! translation, one `word, translation` pair per line, ready for import into
//! a flashcard program.

use std::path::Path;

use crate::language::LanguageKey;
use crate::services::{ServiceError, Translator};
use crate::store::ProficiencyRecord;
use crate::util::write_atomic;

/// One exported line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub word: String,
    /// Empty when the translation failed
    pub translation: String,
}

/// Result of an export: the entries in file order and the words that
/// could not be translated
#[derive(Debug, Default)]
pub struct ExportReport {
    pub entries: Vec<DictionaryEntry>,
    pub failures: Vec<(String, ServiceError)>,
}

impl ExportReport {
    /// File contents: a blank line, then `"<word>, <translation>\n"` per entry
    pub fn text(&self) -> String {
        let mut text = String::from("\n");
        for entry in &self.entries {
            text.push_str(&entry.word);
            text.push_str(", ");
            text.push_str(&entry.translation);
            text.push('\n');
        }
        text
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// One-line summary for the status bar
    pub fn summary(&self) -> String {
        if self.failures.is_empty() {
            format!("Exported {} words", self.entries.len())
        } else {
            format!(
                "Exported {} words ({} untranslated)",
                self.entries.len(),
                self.failures.len()
            )
        }
    }
}

/// Build the dictionary for `record`
///
/// Words are visited in lexicographic order and translated one at a time from
/// `language` into `target`. A failed translation does not stop the export:
/// the word is listed with an empty translation and the failure recorded.
pub fn export(
    record: &ProficiencyRecord,
    language: &LanguageKey,
    target: &str,
    translator: &dyn Translator,
) -> ExportReport {
    let mut report = ExportReport::default();
    let source = language.translate_code();

    for (word, level) in record.iter() {
        if !level.is_studied() {
            continue;
        }
        let translation = match translator.translate(word, source, target) {
            Ok(translation) => translation,
            Err(e) => {
                tracing::warn!("No translation for {:?}: {}", word, e);
                report.failures.push((word.to_string(), e));
                String::new()
            }
        };
        report.entries.push(DictionaryEntry {
            word: word.to_string(),
            translation,
        });
    }

    tracing::info!(
        "Built {} dictionary: {} entries, {} failures",
        language,
        report.entries.len(),
        report.failures.len()
    );
    report
}

/// Replace the dictionary file at `path` with the report's text
pub fn write_export(path: &Path, report: &ExportReport) -> std::io::Result<()> {
    write_atomic(path, report.text().as_bytes())?;
    tracing::info!("Wrote {} entries to {}", report.entries.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Level;
    use std::cell::RefCell;

    /// Upper-cases words; fails for the words listed in `broken`
    struct FakeTranslator {
        broken: Vec<&'static str>,
        calls: RefCell<Vec<(String, String, String)>>,
    }

    impl FakeTranslator {
        fn new() -> Self {
            Self {
                broken: Vec::new(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Translator for FakeTranslator {
        fn translate(&self, word: &str, source: &str, target: &str) -> Result<String, ServiceError> {
            self.calls
                .borrow_mut()
                .push((word.to_string(), source.to_string(), target.to_string()));
            if self.broken.contains(&word) {
                Err(ServiceError::Timeout)
            } else {
                Ok(word.to_uppercase())
            }
        }
    }

    fn record(levels: &[(&str, Level)]) -> ProficiencyRecord {
        let mut record = ProficiencyRecord::new();
        for (word, level) in levels {
            record.set(word, *level);
        }
        record
    }

    #[test]
    fn test_exports_only_studied_words_in_order() {
        let record = record(&[
            ("d", Level::Known),
            ("c", Level::Partial),
            ("b", Level::Unknown),
            ("a", Level::Ignore),
        ]);
        let translator = FakeTranslator::new();

        let report = export(&record, &LanguageKey::new("latin"), "en", &translator);

        assert_eq!(report.text(), "\nb, B\nc, C\n");
        assert!(report.is_complete());
        assert_eq!(translator.calls.borrow().len(), 2);
    }

    #[test]
    fn test_uses_language_codes() {
        let record = record(&[("gato", Level::Unknown)]);
        let translator = FakeTranslator::new();

        export(&record, &LanguageKey::new("spanish"), "de", &translator);

        assert_eq!(
            translator.calls.borrow()[0],
            ("gato".to_string(), "es".to_string(), "de".to_string())
        );
    }

    #[test]
    fn test_failed_translation_keeps_the_word() {
        let record = record(&[("a", Level::Unknown), ("b", Level::Partial)]);
        let mut translator = FakeTranslator::new();
        translator.broken.push("a");

        let report = export(&record, &LanguageKey::new("latin"), "en", &translator);

        assert_eq!(report.text(), "\na, \nb, B\n");
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, "a");
        assert_eq!(report.summary(), "Exported 2 words (1 untranslated)");
    }

    #[test]
    fn test_empty_export_is_a_blank_line() {
        let record = record(&[("a", Level::Known)]);
        let report = export(&record, &LanguageKey::new("latin"), "en", &FakeTranslator::new());
        assert_eq!(report.text(), "\n");
        assert_eq!(report.summary(), "Exported 0 words");
    }

    #[test]
    fn test_write_export_replaces_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("latin").join("dictionary.txt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "stale").unwrap();

        let record = record(&[("amo", Level::Unknown)]);
        let report = export(&record, &LanguageKey::new("latin"), "en", &FakeTranslator::new());
        write_export(&path, &report).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "\namo, AMO\n");
    }
}
