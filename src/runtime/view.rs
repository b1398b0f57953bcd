//! UI rendering
//!
//! Layout structure:
//! - Title bar (1 line)
//! - Body: language menu, text menu, or the current page
//! - Status line (1 line): position, terminal size, translation, message
//! - Key hints (1 line)

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::{AppModel, Screen};
use crate::store::Level;

/// Render the entire UI
pub fn render(frame: &mut Frame, model: &AppModel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    render_title_bar(frame, chunks[0], model);
    match model.screen {
        Screen::LanguageSelect => render_language_menu(frame, chunks[1], model),
        Screen::TextSelect => render_text_menu(frame, chunks[1], model),
        Screen::Reading => render_page(frame, chunks[1], model),
    }
    render_status_line(frame, chunks[2], model);
    render_key_hints(frame, chunks[3], model.screen);
}

/// Foreground color for a word at `level`
pub fn level_style(level: Level) -> Style {
    match level {
        Level::Ignore => Style::default(),
        Level::Unknown => Style::default().fg(Color::Red),
        Level::Partial => Style::default().fg(Color::Yellow),
        Level::Known => Style::default().fg(Color::Green),
    }
}

fn render_title_bar(frame: &mut Frame, area: Rect, model: &AppModel) {
    let mut title = String::from("lingo");
    if let Some(language) = &model.language {
        title.push_str(" :: ");
        title.push_str(language.name());
    }
    if model.screen == Screen::Reading {
        title.push_str(" :: ");
        title.push_str(&model.reader.document.display_name());
    }
    let paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_menu(frame: &mut Frame, area: Rect, title: &str, items: Vec<ListItem>, selected: usize) {
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_language_menu(frame: &mut Frame, area: Rect, model: &AppModel) {
    let items = model
        .language_menu
        .items()
        .iter()
        .map(|name| ListItem::new(name.as_str()))
        .collect();
    render_menu(
        frame,
        area,
        "Choose a language",
        items,
        model.language_menu.selected_index(),
    );
}

fn render_text_menu(frame: &mut Frame, area: Rect, model: &AppModel) {
    let texts_dir = model.library.texts_dir();
    let items = model
        .text_menu
        .items()
        .iter()
        .map(|path| {
            let shown = path.strip_prefix(&texts_dir).unwrap_or(path);
            ListItem::new(shown.display().to_string())
        })
        .collect();
    render_menu(
        frame,
        area,
        "Choose a text",
        items,
        model.text_menu.selected_index(),
    );
}

fn render_page(frame: &mut Frame, area: Rect, model: &AppModel) {
    let reader = &model.reader;
    let words_per_line = reader.document.layout.words_per_line;
    let cursor = reader.cursor.token_index();

    let mut lines = Vec::new();
    let mut spans = Vec::new();
    for (i, (index, word)) in reader.visible_tokens().enumerate() {
        if i > 0 && i % words_per_line == 0 {
            lines.push(Line::from(std::mem::take(&mut spans)));
        }
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        let mut style = if reader.document.is_placeholder {
            Style::default().fg(Color::DarkGray)
        } else {
            level_style(model.level_of(word))
        };
        if index == cursor {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        spans.push(Span::styled(word, style));
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }

    let block = Block::default().borders(Borders::ALL);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_status_line(frame: &mut Frame, area: Rect, model: &AppModel) {
    let label = Style::default().fg(Color::Yellow);
    let mut spans = Vec::new();

    if model.screen == Screen::Reading {
        let doc = &model.reader.document;
        let cursor = &model.reader.cursor;
        spans.push(Span::styled("Page ", label));
        spans.push(Span::raw(format!(
            "{}/{}",
            cursor.page_index() + 1,
            doc.page_count().max(1)
        )));
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(format!("{} ", doc.script.label()), label));
        spans.push(Span::raw(format!(
            "{}/{}",
            cursor.token_index() + 1,
            doc.len()
        )));
        spans.push(Span::raw(" | "));
        let level = model.current_level();
        spans.push(Span::styled(level.label(), level_style(level)));
        spans.push(Span::raw(" | "));
    }

    let (width, height) = model.viewport;
    spans.push(Span::raw(format!("{}x{}", width, height)));

    if let Some(translation) = &model.status.translation {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{}: ", translation.word),
            label.add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(translation.text.as_str()));
    }

    if let Some(message) = &model.status.message {
        spans.push(Span::raw(" | "));
        let style = if message.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(message.text.as_str(), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_key_hints(frame: &mut Frame, area: Rect, screen: Screen) {
    let hints = match screen {
        Screen::LanguageSelect => "j/k move  enter/space choose  q quit",
        Screen::TextSelect => "j/k move  enter/space open  f export  b back  q quit",
        Screen::Reading => {
            "h/l word  j/k line  a/d page  m page start  0-3 rate  4 speak  5 translate  \
             7 strokes  8 web  f export  b back  q quit"
        }
    };
    let paragraph = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}
