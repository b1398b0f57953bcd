//! Command execution
//!
//! Commands run synchronously on the UI thread; each one produces the
//! completion message that is fed back through `update`.

use std::collections::VecDeque;

use crate::commands::Cmd;
use crate::export::{export, write_export};
use crate::messages::{Msg, ServiceMsg};
use crate::model::AppModel;
use crate::services::{AudioPlayer, Browser, Translator};
use crate::update::update;

/// The collaborators commands are executed against
pub struct Services {
    pub translator: Box<dyn Translator>,
    pub audio: Box<dyn AudioPlayer>,
    pub browser: Box<dyn Browser>,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

/// Execute `cmd`, appending completion messages to `out`
pub fn perform(services: &Services, cmd: Cmd, out: &mut Vec<Msg>) {
    match cmd {
        Cmd::Redraw | Cmd::Quit => {}

        Cmd::Translate {
            word,
            source,
            target,
        } => {
            let result = services.translator.translate(&word, &source, &target);
            out.push(Msg::Service(ServiceMsg::Translated { word, result }));
        }

        Cmd::PlayAudio { word, voice } => {
            let result = services.audio.pronounce(&word, &voice);
            out.push(Msg::Service(ServiceMsg::Pronounced { word, result }));
        }

        Cmd::OpenUrl(url) => {
            let result = services.browser.open(&url);
            out.push(Msg::Service(ServiceMsg::UrlOpened(result)));
        }

        Cmd::ExportDictionary {
            language,
            target,
            record,
            path,
        } => {
            let report = export(&record, &language, &target, services.translator.as_ref());
            let result = write_export(&path, &report)
                .map(|()| report.summary())
                .map_err(|e| format!("{}: {}", path.display(), e));
            out.push(Msg::Service(ServiceMsg::Exported { path, result }));
        }
    }
}

/// Apply `msg` and every message its commands produce, in order
pub fn dispatch(model: &mut AppModel, services: &Services, msg: Msg) {
    dispatch_with(model, services, msg, |_| {});
}

/// [`dispatch`], calling `before_blocking` with the model before any command
/// that waits on the network or a subprocess (so the UI can show progress)
pub fn dispatch_with(
    model: &mut AppModel,
    services: &Services,
    msg: Msg,
    mut before_blocking: impl FnMut(&AppModel),
) {
    let mut queue = VecDeque::from([msg]);
    while let Some(msg) = queue.pop_front() {
        if let Some(cmd) = update(model, msg) {
            if cmd.is_blocking() {
                before_blocking(model);
            }
            let mut produced = Vec::new();
            perform(services, cmd, &mut produced);
            queue.extend(produced);
        }
    }
}
