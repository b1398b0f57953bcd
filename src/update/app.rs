//! App message handlers (resize, tick, screen transitions, quit)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{AppModel, Screen};

pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            if model.viewport == (width, height) {
                return None;
            }
            model.resize(width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::Tick => model.status.clear_expired().then_some(Cmd::Redraw),

        AppMsg::Back => {
            match model.screen {
                Screen::Reading => {
                    model.screen = Screen::TextSelect;
                    model.status.translation = None;
                }
                Screen::TextSelect => {
                    model.screen = Screen::LanguageSelect;
                    let previous = model.language.take();
                    model.refresh_languages();
                    if let Some(previous) = previous {
                        model.language_menu.select(&previous.dir_name);
                    }
                }
                Screen::LanguageSelect => return None,
            }
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => {
            model.should_quit = true;
            Some(Cmd::Quit)
        }
    }
}
