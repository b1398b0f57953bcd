//! Command-line argument parsing
//!
//! Supports:
//! - Starting at the language menu (no arguments)
//! - Starting at the text menu of one language (`--language`)
//! - Opening a text directly (`--language L PATH`)
//! - Headless dictionary export (`--export --language L`)

use clap::Parser;
use std::path::PathBuf;

/// A terminal reader that tracks how well you know every word
#[derive(Parser, Debug)]
#[command(name = "lingo", version, about = "Read foreign-language texts and track your vocabulary")]
pub struct CliArgs {
    /// Text to open (requires --language)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Language directory under `languages/` (e.g. russian)
    #[arg(short, long, value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Library root containing `languages/` and `texts/`
    #[arg(long, value_name = "DIR")]
    pub library: Option<PathBuf>,

    /// Write the language's dictionary file and exit
    #[arg(short = 'e', long)]
    pub export: bool,
}

/// What the reader starts with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupMode {
    /// Language menu
    Browse,
    /// Text menu of one language
    Language(String),
    /// A text opened in the reading screen
    Read { language: String, path: PathBuf },
    /// Headless export; no terminal UI
    Export(String),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub mode: StartupMode,
    /// Library root override
    pub library: Option<PathBuf>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let language = self
            .language
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());

        let mode = match (self.export, language, self.path) {
            (true, Some(language), None) => StartupMode::Export(language),
            (true, None, _) => return Err("--export requires --language".to_string()),
            (true, Some(_), Some(_)) => {
                return Err("--export exports a whole language; drop PATH".to_string())
            }
            (false, Some(language), Some(path)) => StartupMode::Read { language, path },
            (false, None, Some(_)) => {
                return Err("opening a text requires --language".to_string())
            }
            (false, Some(language), None) => StartupMode::Language(language),
            (false, None, None) => StartupMode::Browse,
        };

        Ok(StartupConfig {
            mode,
            library: self.library,
        })
    }
}

impl StartupConfig {
    /// Whether the terminal UI runs
    pub fn is_interactive(&self) -> bool {
        !matches!(self.mode, StartupMode::Export(_))
    }
}
