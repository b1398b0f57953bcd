//! Runtime module - terminal integration
//!
//! - `app` - crossterm event loop and terminal setup/teardown
//! - `effects` - command execution against the collaborators
//! - `view` - ratatui rendering of the model

pub mod app;
pub mod effects;
pub mod view;

pub use app::App;
pub use effects::{dispatch, dispatch_with, perform, Services};
