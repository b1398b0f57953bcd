//! Reader configuration persistence
//!
//! Reads user preferences from `~/.config/lingo/config.yaml`

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Reader configuration, edited by hand and read at startup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReaderConfig {
    /// Language code translations are made into (e.g., "en", "de")
    #[serde(default = "default_interface_language")]
    pub interface_language: String,

    /// Library root holding `languages/` and `texts/`; the working
    /// directory when unset
    #[serde(default)]
    pub library_dir: Option<PathBuf>,

    /// Timeout for every outbound HTTP request
    #[serde(default = "default_timeout_secs")]
    pub translation_timeout_secs: u64,

    /// Program (and leading arguments) used to play pronunciation clips
    #[serde(default = "default_audio_command")]
    pub audio_command: Vec<String>,
}

fn default_interface_language() -> String {
    "en".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_audio_command() -> Vec<String> {
    vec!["mpv".to_string(), "--really-quiet".to_string()]
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            interface_language: default_interface_language(),
            library_dir: None,
            translation_timeout_secs: default_timeout_secs(),
            audio_command: default_audio_command(),
        }
    }
}

impl ReaderConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.translation_timeout_secs.max(1))
    }

    /// Library root: `override_dir`, then the configured directory, then the
    /// working directory
    pub fn library_root(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.library_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
