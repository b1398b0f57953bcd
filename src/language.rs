//! Registry of studied languages
//!
//! Maps a language directory name (`languages/<name>/`) to the codes the
//! collaborators need: the translation service's language code, the
//! text-to-speech voice id, and the script class used for tokenizing.

use crate::text::ScriptClass;

/// One entry of the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Directory name under `languages/`
    pub name: &'static str,
    /// Code for the translation service's language pair
    pub translate_code: &'static str,
    /// Voice id for the text-to-speech service
    pub voice: &'static str,
    pub script: ScriptClass,
}

const fn spaced(name: &'static str, translate_code: &'static str, voice: &'static str) -> Language {
    Language {
        name,
        translate_code,
        voice,
        script: ScriptClass::SpaceDelimited,
    }
}

/// Every language with a known voice, sorted by name
pub static LANGUAGES: &[Language] = &[
    spaced("afrikaans", "af", "af-ZA"),
    spaced("albanian", "sq", "sq"),
    spaced("arabic", "ar", "ar-AE"),
    spaced("armenian", "hy", "hy"),
    spaced("bengali-bd", "bn", "bn-BD"),
    spaced("bengali-in", "bn", "bn-IN"),
    spaced("bosnian", "bs", "bs"),
    spaced("burmese", "my", "my"),
    spaced("catalan", "ca", "ca-ES"),
    Language {
        name: "chinese",
        translate_code: "zh-TW",
        voice: "cmn-Hant-TW",
        script: ScriptClass::Logographic,
    },
    spaced("croatian", "hr", "hr-HR"),
    spaced("czech", "cs", "cs-CZ"),
    spaced("danish", "da", "da-DK"),
    spaced("dutch", "nl", "nl-NL"),
    spaced("english-aus", "en", "en-AU"),
    spaced("english-gb", "en", "en-GB"),
    spaced("english-us", "en", "en-US"),
    spaced("esperanto", "eo", "eo"),
    spaced("estonian", "et", "et"),
    spaced("filipino", "tl", "fil-PH"),
    spaced("finnish", "fi", "fi-FI"),
    spaced("french", "fr", "fr-FR"),
    spaced("french-can", "fr", "fr-CA"),
    spaced("german", "de", "de-DE"),
    spaced("greek", "el", "el-GR"),
    spaced("gujarati", "gu", "gu"),
    spaced("hindi", "hi", "hi-IN"),
    spaced("hungarian", "hu", "hu-HU"),
    spaced("icelandic", "is", "is-IS"),
    spaced("indonesian", "id", "id-ID"),
    spaced("italian", "it", "it-IT"),
    spaced("japanese", "ja", "ja-JP"),
    spaced("kannada", "kn", "kn"),
    spaced("khmer", "km", "km"),
    spaced("korean", "ko", "ko-KR"),
    spaced("latin", "la", "la"),
    spaced("latvian", "lv", "lv"),
    spaced("macedonian", "mk", "mk"),
    spaced("malayalam", "ml", "ml"),
    spaced("marathi", "mr", "mr"),
    spaced("nepali", "ne", "ne"),
    spaced("norwegian", "no", "nb-NO"),
    spaced("polish", "pl", "pl-PL"),
    spaced("portuguese", "pt", "pt-BR"),
    spaced("romanian", "ro", "ro-RO"),
    spaced("russian", "ru", "ru-RU"),
    spaced("serbian", "sr", "sr-RS"),
    spaced("slovak", "sk", "sk-SK"),
    spaced("spanish", "es", "es-ES"),
    spaced("swedish", "sv", "sv-SE"),
    spaced("turkish", "tr", "tr-TR"),
    spaced("ukrainian", "uk", "uk-UA"),
    spaced("vietnamese", "vi", "vi-VN"),
    spaced("welsh", "cy", "cy"),
];

/// A language resolved from a directory name
///
/// Names missing from the registry still work: they tokenize as
/// space-delimited and use the directory name itself as their codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageKey {
    /// The directory name exactly as found on disk (the store key)
    pub dir_name: String,
    pub entry: Option<&'static Language>,
}

impl Language {
    /// Registry entry for `name`, ignoring ASCII case
    pub fn lookup(name: &str) -> Option<&'static Language> {
        LANGUAGES
            .iter()
            .find(|lang| lang.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl LanguageKey {
    pub fn new(dir_name: impl Into<String>) -> Self {
        let dir_name = dir_name.into();
        let entry = Language::lookup(&dir_name);
        if entry.is_none() {
            tracing::debug!("{:?} is not in the language registry", dir_name);
        }
        Self { dir_name, entry }
    }

    pub fn name(&self) -> &str {
        &self.dir_name
    }

    pub fn translate_code(&self) -> &str {
        self.entry
            .map(|lang| lang.translate_code)
            .unwrap_or(&self.dir_name)
    }

    pub fn voice(&self) -> &str {
        self.entry.map(|lang| lang.voice).unwrap_or(&self.dir_name)
    }

    pub fn script(&self) -> ScriptClass {
        ScriptClass::for_language(self)
    }

    pub fn is_known(&self) -> bool {
        self.entry.is_some()
    }
}

impl std::fmt::Display for LanguageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_sorted_and_unique() {
        for pair in LANGUAGES.windows(2) {
            assert!(pair[0].name < pair[1].name, "{} >= {}", pair[0].name, pair[1].name);
        }
    }

    #[test]
    fn test_lookup_ignores_case() {
        let lang = Language::lookup("Russian").unwrap();
        assert_eq!(lang.voice, "ru-RU");
        assert_eq!(lang.translate_code, "ru");
        assert!(Language::lookup("klingon").is_none());
    }

    #[test]
    fn test_chinese_is_logographic() {
        let key = LanguageKey::new("chinese");
        assert_eq!(key.script(), ScriptClass::Logographic);
        assert_eq!(key.voice(), "cmn-Hant-TW");
        assert_eq!(LanguageKey::new("german").script(), ScriptClass::SpaceDelimited);
    }

    #[test]
    fn test_unknown_language_falls_back_to_dir_name() {
        let key = LanguageKey::new("quenya");
        assert!(!key.is_known());
        assert_eq!(key.translate_code(), "quenya");
        assert_eq!(key.voice(), "quenya");
        assert_eq!(key.script(), ScriptClass::SpaceDelimited);
    }

    #[test]
    fn test_key_keeps_dir_name_case() {
        let key = LanguageKey::new("Latin");
        assert_eq!(key.name(), "Latin");
        assert_eq!(key.translate_code(), "la");
    }
}
