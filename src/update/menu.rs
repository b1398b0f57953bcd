//! Language and text menu handlers

use crate::commands::Cmd;
use crate::messages::MenuMsg;
use crate::model::{AppModel, Screen};

pub fn update_menu(model: &mut AppModel, msg: MenuMsg) -> Option<Cmd> {
    match (model.screen, msg) {
        (Screen::LanguageSelect, MenuMsg::Move(direction)) => {
            model.language_menu.move_by(direction.delta());
            Some(Cmd::Redraw)
        }
        (Screen::TextSelect, MenuMsg::Move(direction)) => {
            model.text_menu.move_by(direction.delta());
            Some(Cmd::Redraw)
        }
        (Screen::LanguageSelect, MenuMsg::Select) => {
            let name = model.language_menu.selected()?.clone();
            model.choose_language(&name);
            Some(Cmd::Redraw)
        }
        (Screen::TextSelect, MenuMsg::Select) => {
            let path = model.text_menu.selected()?.clone();
            model.open_text(&path);
            Some(Cmd::Redraw)
        }
        (Screen::Reading, _) => None,
    }
}
