//! Reading documents out of the library
//!
//! A document is tokenized in one pass, so it is read whole. Before that the
//! file must be a regular file under `MAX_TEXT_SIZE` whose leading bytes hold
//! no NUL (a PDF or an EPUB dropped into `texts/` is not a readable text) and
//! whose content is UTF-8.

use std::fs;
use std::path::Path;

/// Largest document the reader opens (10 MB)
pub const MAX_TEXT_SIZE: u64 = 10 * 1024 * 1024;

/// Leading bytes searched for NUL
const SNIFF_LEN: usize = 8192;

/// Why a document could not be opened
#[derive(Debug, Clone, PartialEq)]
pub enum TextFileError {
    /// The path no longer exists (deleted since the menu was listed)
    Missing,
    Unreadable,
    /// A folder under `texts/`
    Directory,
    /// NUL bytes near the start; an office document or an archive
    NotText,
    NotUtf8,
    TooLarge { bytes: u64 },
    Io(String),
}

impl TextFileError {
    /// Status line message naming the document
    pub fn describe(&self, name: &str) -> String {
        match self {
            Self::Missing => format!("{} is no longer in the library", name),
            Self::Unreadable => format!("{} cannot be read (permission denied)", name),
            Self::Directory => format!("{} is a folder, not a text", name),
            Self::NotText => format!("{} is not a plain text file", name),
            Self::NotUtf8 => format!("{} is not UTF-8 text", name),
            Self::TooLarge { bytes } => format!(
                "{} is too long to read ({} MB, limit {} MB)",
                name,
                megabytes(*bytes),
                megabytes(MAX_TEXT_SIZE)
            ),
            Self::Io(msg) => format!("Cannot open {}: {}", name, msg),
        }
    }
}

impl std::fmt::Display for TextFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "no such text"),
            Self::Unreadable => write!(f, "permission denied"),
            Self::Directory => write!(f, "is a directory"),
            Self::NotText => write!(f, "not a plain text file"),
            Self::NotUtf8 => write!(f, "not valid UTF-8"),
            Self::TooLarge { bytes } => write!(f, "text too long ({} MB)", megabytes(*bytes)),
            Self::Io(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for TextFileError {}

impl From<std::io::Error> for TextFileError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => Self::Missing,
            std::io::ErrorKind::PermissionDenied => Self::Unreadable,
            _ => Self::Io(e.to_string()),
        }
    }
}

fn megabytes(bytes: u64) -> u64 {
    bytes.div_ceil(1024 * 1024)
}

/// Refuse folders and oversized files without reading them
pub fn check_text_file(path: &Path) -> Result<(), TextFileError> {
    let metadata = fs::metadata(path)?;
    if metadata.is_dir() {
        return Err(TextFileError::Directory);
    }
    if metadata.len() > MAX_TEXT_SIZE {
        return Err(TextFileError::TooLarge {
            bytes: metadata.len(),
        });
    }
    Ok(())
}

/// True when the opening bytes contain no NUL
pub fn looks_like_text(bytes: &[u8]) -> bool {
    !bytes[..bytes.len().min(SNIFF_LEN)].contains(&0)
}

/// Read a whole document as UTF-8
pub fn read_text_file(path: &Path) -> Result<String, TextFileError> {
    check_text_file(path)?;
    let bytes = fs::read(path)?;
    if !looks_like_text(&bytes) {
        return Err(TextFileError::NotText);
    }
    String::from_utf8(bytes).map_err(|_| TextFileError::NotUtf8)
}

/// The file name shown in the text menu and in error messages
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
