use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use lingo::cli::{CliArgs, StartupConfig, StartupMode};
use lingo::config::ReaderConfig;
use lingo::export::{export, write_export};
use lingo::language::LanguageKey;
use lingo::library::Library;
use lingo::model::AppModel;
use lingo::runtime::{App, Services};
use lingo::services::{MyMemoryTranslator, SoundOfText, SystemBrowser};
use lingo::store::ProficiencyStore;

fn main() -> ExitCode {
    let startup = match CliArgs::parse().into_config() {
        Ok(startup) => startup,
        Err(e) => {
            eprintln!("lingo: {}", e);
            return ExitCode::from(2);
        }
    };

    lingo::tracing::init(!startup.is_interactive());

    match run(startup) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("lingo: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(startup: StartupConfig) -> Result<()> {
    let config = ReaderConfig::load();
    let library = Library::new(config.library_root(startup.library.as_deref()));
    tracing::info!("Library at {}", library.root().display());

    let translator = MyMemoryTranslator::new(config.timeout())
        .context("Failed to set up the translation client")?;

    if let StartupMode::Export(language) = &startup.mode {
        return export_headless(&library, &config, language, &translator);
    }

    let audio = SoundOfText::new(
        library.audio_dir(),
        config.audio_command.clone(),
        config.timeout(),
    )
    .context("Failed to set up the audio client")?;
    let services = Services {
        translator: Box::new(translator),
        audio: Box::new(audio),
        browser: Box::new(SystemBrowser),
    };

    let mut model = AppModel::new(library, config);
    match startup.mode {
        StartupMode::Browse | StartupMode::Export(_) => {}
        StartupMode::Language(language) => model.choose_language(&language),
        StartupMode::Read { language, path } => {
            model.choose_language(&language);
            model.text_menu.select(&path);
            model.open_text(&path);
        }
    }

    App::new(model, services).run()?;
    Ok(())
}

/// `--export`: write the dictionary file and report on stdout
fn export_headless(
    library: &Library,
    config: &ReaderConfig,
    language: &str,
    translator: &MyMemoryTranslator,
) -> Result<()> {
    let key = LanguageKey::new(language);
    let mut store = ProficiencyStore::new(library.languages_dir());
    let record = store
        .load_existing(key.name())
        .with_context(|| format!("Failed to load the {} record", key))?;

    let report = export(record, &key, &config.interface_language, translator);
    let path = library.dictionary_path(key.name());
    write_export(&path, &report).with_context(|| format!("Failed to write {}", path.display()))?;

    for (word, error) in &report.failures {
        eprintln!("warning: no translation for {:?}: {}", word, error);
    }
    println!("{} to {}", report.summary(), path.display());
    Ok(())
}
