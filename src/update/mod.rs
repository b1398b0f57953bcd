//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Messages are
//! applied one at a time, in the order they were produced.

mod app;
mod menu;
mod navigation;
mod service;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::NavigationSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use menu::update_menu;
pub use navigation::{update_nav, update_rate};
pub use service::update_service;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Nav(m) => navigation::update_nav(model, m),
        Msg::Rate(level) => navigation::update_rate(model, level),
        Msg::Menu(m) => menu::update_menu(model, m),
        Msg::Service(m) => service::update_service(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures the reading position before and after and logs the diff.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let is_noisy = msg.is_noisy();
    let msg_name = format!("{:?}", msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let before = NavigationSnapshot::from_model(model);
    let result = update_inner(model, msg);
    let after = NavigationSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "navigation", %diff, "state changed");
    }

    debug_assert!(
        model.reader.cursor.is_synced(&model.reader.document),
        "cursor out of sync after {}",
        msg_name
    );

    result
}
