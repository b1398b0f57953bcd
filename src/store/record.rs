//! Per-language word → level mapping

use std::collections::BTreeMap;

use serde::Serialize;

use super::level::Level;

/// Proficiency of every word seen in one language
///
/// Keys are exact token text (case-sensitive). Iteration is lexicographic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProficiencyRecord {
    levels: BTreeMap<String, Level>,
}

impl ProficiencyRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// A record with every word of `vocabulary` at [`Level::Ignore`]
    pub fn seeded<'a>(vocabulary: impl IntoIterator<Item = &'a str>) -> Self {
        let mut record = Self::new();
        record.extend_with(vocabulary);
        record
    }

    /// Level of `word`; words never rated read as [`Level::Ignore`]
    pub fn level_of(&self, word: &str) -> Level {
        self.levels.get(word).copied().unwrap_or_default()
    }

    /// Set the level of `word`, returning the previous entry
    pub fn set(&mut self, word: &str, level: Level) -> Option<Level> {
        self.levels.insert(word.to_string(), level)
    }

    /// Put back an entry as returned by [`set`](Self::set)
    pub fn restore(&mut self, word: &str, previous: Option<Level>) {
        match previous {
            Some(level) => {
                self.levels.insert(word.to_string(), level);
            }
            None => {
                self.levels.remove(word);
            }
        }
    }

    /// Add unseen words at [`Level::Ignore`]; returns how many were added
    pub fn extend_with<'a>(&mut self, vocabulary: impl IntoIterator<Item = &'a str>) -> usize {
        let before = self.levels.len();
        for word in vocabulary {
            if !self.levels.contains_key(word) {
                self.levels.insert(word.to_string(), Level::Ignore);
            }
        }
        self.levels.len() - before
    }

    pub fn contains(&self, word: &str) -> bool {
        self.levels.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Entries in lexicographic word order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Level)> {
        self.levels.iter().map(|(w, l)| (w.as_str(), *l))
    }

    /// Number of words at each level, indexed by level value
    pub fn counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for level in self.levels.values() {
            counts[*level as usize] += 1;
        }
        counts
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a stored record
    ///
    /// Entries whose value is not a known level are dropped (they then read
    /// as Ignore) rather than failing the whole record.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut levels = BTreeMap::new();
        for (word, value) in raw {
            match level_from_value(&value) {
                Some(level) => {
                    levels.insert(word, level);
                }
                None => {
                    tracing::warn!("Dropping invalid level {} for {:?}", value, word);
                }
            }
        }
        Ok(Self { levels })
    }
}

/// A stored level: an integer in `0..=3`
fn level_from_value(value: &serde_json::Value) -> Option<Level> {
    let value = u8::try_from(value.as_u64()?).ok()?;
    Level::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unseen_word_is_ignore() {
        let record = ProficiencyRecord::new();
        assert_eq!(record.level_of("nunca"), Level::Ignore);
    }

    #[test]
    fn test_set_and_get() {
        let mut record = ProficiencyRecord::new();
        assert_eq!(record.set("gato", Level::Partial), None);
        assert_eq!(record.level_of("gato"), Level::Partial);
        assert_eq!(record.set("gato", Level::Known), Some(Level::Partial));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut record = ProficiencyRecord::new();
        record.set("Haus", Level::Known);
        assert_eq!(record.level_of("haus"), Level::Ignore);
    }

    #[test]
    fn test_restore_previous() {
        let mut record = ProficiencyRecord::new();
        let prev = record.set("a", Level::Known);
        record.restore("a", prev);
        assert!(!record.contains("a"));

        record.set("b", Level::Unknown);
        let prev = record.set("b", Level::Known);
        record.restore("b", prev);
        assert_eq!(record.level_of("b"), Level::Unknown);
    }

    #[test]
    fn test_extend_keeps_existing_levels() {
        let mut record = ProficiencyRecord::seeded(["a", "b"]);
        record.set("a", Level::Known);
        let added = record.extend_with(["a", "c", "c"]);
        assert_eq!(added, 1);
        assert_eq!(record.level_of("a"), Level::Known);
        assert!(record.contains("c"));
    }

    #[test]
    fn test_json_is_flat_object() {
        let mut record = ProficiencyRecord::seeded(["b", "a"]);
        record.set("b", Level::Partial);
        assert_eq!(record.to_json().unwrap(), r#"{"a":0,"b":2}"#);
    }

    #[test]
    fn test_from_json_drops_bad_levels() {
        let record = ProficiencyRecord::from_json(r#"{"a":1,"b":9,"c":-1}"#).unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record.level_of("a"), Level::Unknown);
        assert_eq!(record.level_of("b"), Level::Ignore);
    }

    #[test]
    fn test_from_json_drops_non_integer_levels_only() {
        let record =
            ProficiencyRecord::from_json(r#"{"a":2.0,"b":1,"c":"3","d":null,"e":[2]}"#).unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record.level_of("b"), Level::Unknown);
        assert!(!record.contains("a"));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(ProficiencyRecord::from_json("{not json").is_err());
        assert!(ProficiencyRecord::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_counts() {
        let mut record = ProficiencyRecord::seeded(["a", "b", "c", "d"]);
        record.set("b", Level::Unknown);
        record.set("c", Level::Unknown);
        record.set("d", Level::Known);
        assert_eq!(record.counts(), [1, 2, 0, 1]);
    }
}
