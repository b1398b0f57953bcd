//! Reading-screen handlers: cursor movement and rating

use crate::commands::Cmd;
use crate::messages::NavMsg;
use crate::model::{AppModel, Screen};
use crate::store::Level;

/// Handle cursor movement on the reading screen
pub fn update_nav(model: &mut AppModel, msg: NavMsg) -> Option<Cmd> {
    if model.screen != Screen::Reading {
        return None;
    }

    let reader = &mut model.reader;
    let doc = &reader.document;
    let cursor = &mut reader.cursor;

    match msg {
        NavMsg::MoveToken(direction) => cursor.move_token(doc, direction.delta()),
        NavMsg::MoveLine(direction) => cursor.move_line(doc, direction.delta()),
        NavMsg::FlipPage(direction) => {
            cursor.move_page(doc, direction.delta());
            cursor.jump_to_page_start(doc);
        }
        NavMsg::PageStart => cursor.jump_to_page_start(doc),
        NavMsg::DocumentStart => cursor.jump_to_start(doc),
        NavMsg::DocumentEnd => cursor.jump_to_end(doc),
    }

    Some(Cmd::Redraw)
}

/// Rate the word under the cursor and persist the record
pub fn update_rate(model: &mut AppModel, level: Level) -> Option<Cmd> {
    if model.screen != Screen::Reading {
        return None;
    }
    if model.reader.document.is_placeholder {
        model.status.info("Nothing to rate in an empty document");
        return Some(Cmd::Redraw);
    }

    let (Some(language), Some(word)) = (&model.language, model.reader.current_word()) else {
        return None;
    };

    match model.store.set_level(language.name(), word, level) {
        Ok(()) => model.status.info(format!("{} → {}", word, level)),
        Err(e) => model.status.error(format!("Rating not saved: {}", e)),
    }
    Some(Cmd::Redraw)
}
