//! Collaborator requests (translate, pronounce, browser, export) and their results

use crate::commands::Cmd;
use crate::messages::ServiceMsg;
use crate::model::{AppModel, Screen, Translation};
use crate::services::{stroke_order_url, web_translator_url};
use crate::text::ScriptClass;

pub fn update_service(model: &mut AppModel, msg: ServiceMsg) -> Option<Cmd> {
    match msg {
        ServiceMsg::Translate => {
            let (word, source) = reading_target(model)?;
            model.status.info(format!("Translating {}...", word));
            Some(Cmd::Translate {
                word,
                source,
                target: model.config.interface_language.clone(),
            })
        }

        ServiceMsg::Pronounce => {
            let (word, _) = reading_target(model)?;
            let voice = model.language.as_ref()?.voice().to_string();
            model.status.info(format!("Fetching audio for {}...", word));
            Some(Cmd::PlayAudio { word, voice })
        }

        ServiceMsg::StrokeOrder => {
            let (word, _) = reading_target(model)?;
            if model.reader.document.script != ScriptClass::Logographic {
                model
                    .status
                    .info("Stroke order is only available for Chinese characters");
                return Some(Cmd::Redraw);
            }
            open_url(model, stroke_order_url(&word))
        }

        ServiceMsg::WebTranslate => {
            let (word, source) = reading_target(model)?;
            let url = web_translator_url(&word, &source, &model.config.interface_language);
            open_url(model, url)
        }

        ServiceMsg::ExportDictionary => {
            if model.screen == Screen::LanguageSelect {
                return None;
            }
            let language = model.language.clone()?;
            let record = match model.store.load_existing(language.name()) {
                Ok(record) => record.clone(),
                Err(e) => {
                    model.status.error(format!("Cannot export: {}", e));
                    return Some(Cmd::Redraw);
                }
            };
            let [_, unknown, partial, _] = record.counts();
            model.status.info(format!(
                "Exporting {} words ({} unknown, {} partially known) for {}...",
                unknown + partial,
                unknown,
                partial,
                language
            ));
            Some(Cmd::ExportDictionary {
                path: model.library.dictionary_path(language.name()),
                target: model.config.interface_language.clone(),
                language,
                record,
            })
        }

        ServiceMsg::Translated { word, result } => {
            match result {
                Ok(text) => {
                    model.status.message = None;
                    model.status.translation = Some(Translation { word, text });
                }
                Err(e) => model.status.error(format!("Translation of {} failed: {}", word, e)),
            }
            Some(Cmd::Redraw)
        }

        ServiceMsg::Pronounced { word, result } => {
            match result {
                Ok(()) => model.status.message = None,
                Err(e) => model.status.error(format!("Cannot pronounce {}: {}", word, e)),
            }
            Some(Cmd::Redraw)
        }

        ServiceMsg::UrlOpened(result) => {
            if let Err(e) = result {
                model.status.error(format!("Cannot open browser: {}", e));
            }
            Some(Cmd::Redraw)
        }

        ServiceMsg::Exported { path, result } => {
            match result {
                Ok(summary) => model
                    .status
                    .info(format!("{} to {}", summary, path.display())),
                Err(e) => model.status.error(format!("Export failed: {}", e)),
            }
            Some(Cmd::Redraw)
        }
    }
}

/// The word under the cursor and the source language code, on the reading
/// screen of a real document
fn reading_target(model: &mut AppModel) -> Option<(String, String)> {
    if model.screen != Screen::Reading {
        return None;
    }
    if model.reader.document.is_placeholder {
        model.status.info("The document is empty");
        return None;
    }
    let word = model.reader.current_word()?.to_string();
    let source = model.language.as_ref()?.translate_code().to_string();
    Some((word, source))
}

fn open_url(
    model: &mut AppModel,
    url: Result<String, crate::services::ServiceError>,
) -> Option<Cmd> {
    match url {
        Ok(url) => Some(Cmd::OpenUrl(url)),
        Err(e) => {
            model.status.error(format!("Cannot build link: {}", e));
            Some(Cmd::Redraw)
        }
    }
}
