//! Keyboard input mapping
//!
//! Translates terminal key events into messages for the current screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::messages::{AppMsg, Direction, MenuMsg, Msg, NavMsg, ServiceMsg};
use crate::model::Screen;
use crate::store::Level;

/// Map a key press to a message; None for unbound keys and key releases
pub fn key_to_msg(screen: Screen, key: KeyEvent) -> Option<Msg> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Global bindings
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Msg::App(AppMsg::Quit));
        }
        KeyCode::Char('q') => return Some(Msg::App(AppMsg::Quit)),
        _ => {}
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }

    match screen {
        Screen::LanguageSelect => menu_key(key.code, false),
        Screen::TextSelect => menu_key(key.code, true),
        Screen::Reading => reading_key(key.code),
    }
}

fn menu_key(code: KeyCode, can_export: bool) -> Option<Msg> {
    let msg = match code {
        KeyCode::Char('k') | KeyCode::Up => Msg::Menu(MenuMsg::Move(Direction::Backward)),
        KeyCode::Char('j') | KeyCode::Down => Msg::Menu(MenuMsg::Move(Direction::Forward)),
        KeyCode::Enter | KeyCode::Char(' ') => Msg::Menu(MenuMsg::Select),
        KeyCode::Char('b') | KeyCode::Esc | KeyCode::Backspace => Msg::App(AppMsg::Back),
        KeyCode::Char('f') if can_export => Msg::Service(ServiceMsg::ExportDictionary),
        _ => return None,
    };
    Some(msg)
}

fn reading_key(code: KeyCode) -> Option<Msg> {
    use Direction::{Backward, Forward};

    let msg = match code {
        KeyCode::Char('h') | KeyCode::Left => Msg::Nav(NavMsg::MoveToken(Backward)),
        KeyCode::Char('l') | KeyCode::Right => Msg::Nav(NavMsg::MoveToken(Forward)),
        KeyCode::Char('k') | KeyCode::Up => Msg::Nav(NavMsg::MoveLine(Backward)),
        KeyCode::Char('j') | KeyCode::Down => Msg::Nav(NavMsg::MoveLine(Forward)),
        KeyCode::Char('a') | KeyCode::PageUp => Msg::Nav(NavMsg::FlipPage(Backward)),
        KeyCode::Char('d') | KeyCode::PageDown => Msg::Nav(NavMsg::FlipPage(Forward)),
        KeyCode::Char('m') => Msg::Nav(NavMsg::PageStart),
        KeyCode::Home => Msg::Nav(NavMsg::DocumentStart),
        KeyCode::End => Msg::Nav(NavMsg::DocumentEnd),
        KeyCode::Char(c @ '0'..='3') => Msg::Rate(Level::from_digit(c)?),
        KeyCode::Char('4') => Msg::Service(ServiceMsg::Pronounce),
        KeyCode::Char('5') | KeyCode::Char('9') => Msg::Service(ServiceMsg::Translate),
        KeyCode::Char('7') => Msg::Service(ServiceMsg::StrokeOrder),
        KeyCode::Char('8') => Msg::Service(ServiceMsg::WebTranslate),
        KeyCode::Char('f') => Msg::Service(ServiceMsg::ExportDictionary),
        KeyCode::Char('b') | KeyCode::Esc => Msg::App(AppMsg::Back),
        _ => return None,
    };
    Some(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_everywhere() {
        for screen in [Screen::LanguageSelect, Screen::TextSelect, Screen::Reading] {
            assert!(matches!(
                key_to_msg(screen, key(KeyCode::Char('q'))),
                Some(Msg::App(AppMsg::Quit))
            ));
            assert!(matches!(
                key_to_msg(screen, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
                Some(Msg::App(AppMsg::Quit))
            ));
        }
    }

    #[test]
    fn test_rating_keys() {
        assert!(matches!(
            key_to_msg(Screen::Reading, key(KeyCode::Char('2'))),
            Some(Msg::Rate(Level::Partial))
        ));
        assert!(matches!(
            key_to_msg(Screen::Reading, key(KeyCode::Char('0'))),
            Some(Msg::Rate(Level::Ignore))
        ));
        assert!(key_to_msg(Screen::TextSelect, key(KeyCode::Char('2'))).is_none());
    }

    #[test]
    fn test_export_only_from_text_menu_and_reading() {
        assert!(key_to_msg(Screen::LanguageSelect, key(KeyCode::Char('f'))).is_none());
        assert!(matches!(
            key_to_msg(Screen::TextSelect, key(KeyCode::Char('f'))),
            Some(Msg::Service(ServiceMsg::ExportDictionary))
        ));
    }

    #[test]
    fn test_space_selects_in_menus() {
        for screen in [Screen::LanguageSelect, Screen::TextSelect] {
            assert!(matches!(
                key_to_msg(screen, key(KeyCode::Char(' '))),
                Some(Msg::Menu(MenuMsg::Select))
            ));
        }
        assert!(key_to_msg(Screen::Reading, key(KeyCode::Char(' '))).is_none());
    }

    #[test]
    fn test_release_is_ignored() {
        let mut event = key(KeyCode::Char('l'));
        event.kind = KeyEventKind::Release;
        assert!(key_to_msg(Screen::Reading, event).is_none());
    }
}
