//! Utility modules

pub mod atomic;
pub mod text_file;

pub use atomic::write_atomic;
pub use text_file::{display_name, read_text_file, TextFileError, MAX_TEXT_SIZE};
