use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::input::key_to_msg;
use crate::messages::{AppMsg, Msg};
use crate::model::AppModel;
use crate::services::{TerminalMetrics, ViewportMetrics};

use super::effects::{dispatch_with, Services};
use super::view::render;

/// How often the loop wakes up without input (status expiry, size polling)
const TICK_INTERVAL: Duration = Duration::from_millis(250);

type Backend = CrosstermBackend<Stdout>;

/// Puts the terminal back into cooked mode on drop, including on panics and
/// early returns
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

pub struct App {
    model: AppModel,
    services: Services,
    metrics: TerminalMetrics,
}

impl App {
    pub fn new(model: AppModel, services: Services) -> Self {
        Self {
            model,
            services,
            metrics: TerminalMetrics,
        }
    }

    /// Run the event loop until the user quits
    pub fn run(mut self) -> Result<AppModel> {
        let guard = TerminalGuard::enter()?;
        let mut terminal =
            Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to open terminal")?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal);

        terminal.show_cursor().ok();
        drop(guard);
        result.map(|()| self.model)
    }

    fn event_loop(&mut self, terminal: &mut Terminal<Backend>) -> Result<()> {
        let (width, height) = self.metrics.size();
        self.handle(terminal, Msg::App(AppMsg::Resize(width, height)));

        while !self.model.should_quit {
            terminal.draw(|frame| render(frame, &self.model))?;

            if !event::poll(TICK_INTERVAL)? {
                self.handle(terminal, Msg::App(AppMsg::Tick));
                // Some terminals never report resizes; poll the size as well
                let (width, height) = self.metrics.size();
                self.handle(terminal, Msg::App(AppMsg::Resize(width, height)));
                continue;
            }

            match event::read()? {
                Event::Key(key) => {
                    if let Some(msg) = key_to_msg(self.model.screen, key) {
                        self.handle(terminal, msg);
                    }
                }
                Event::Resize(width, height) => {
                    self.handle(
                        terminal,
                        Msg::App(AppMsg::Resize(i32::from(width), i32::from(height))),
                    );
                }
                _ => {}
            }
        }

        tracing::info!("Quit requested");
        Ok(())
    }

    fn handle(&mut self, terminal: &mut Terminal<Backend>, msg: Msg) {
        dispatch_with(&mut self.model, &self.services, msg, |model| {
            // Show the progress message before blocking on the network
            if let Err(e) = terminal.draw(|frame| render(frame, model)) {
                tracing::warn!("Redraw failed: {}", e);
            }
        });
    }
}
