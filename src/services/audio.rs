//! Word pronunciation: fetch a clip from soundoftext.com, play it, delete it

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::ServiceError;

pub const SOUNDS_URL: &str = "https://api.soundoftext.com/sounds";
pub const FILES_URL: &str = "https://files.soundoftext.com";

/// Attempts to download a clip the service is still rendering
const DOWNLOAD_ATTEMPTS: u32 = 4;
const DOWNLOAD_RETRY_DELAY: Duration = Duration::from_millis(300);

/// Fetches and plays spoken words
pub trait AudioPlayer {
    /// Download the pronunciation of `word` and return the local file
    fn fetch(&self, word: &str, voice: &str) -> Result<PathBuf, ServiceError>;

    /// Play a downloaded clip, blocking until it finishes
    fn play(&self, path: &Path) -> Result<(), ServiceError>;

    /// Remove a downloaded clip
    fn delete(&self, path: &Path) -> Result<(), ServiceError>;

    /// Fetch, play and delete; the clip is removed even when playback fails
    fn pronounce(&self, word: &str, voice: &str) -> Result<(), ServiceError> {
        let path = self.fetch(word, voice)?;
        let played = self.play(&path);
        if let Err(e) = self.delete(&path) {
            tracing::warn!("Failed to delete {}: {}", path.display(), e);
        }
        played
    }
}

#[derive(Debug, Serialize)]
struct SoundRequest<'a> {
    engine: &'a str,
    data: SoundData<'a>,
}

#[derive(Debug, Serialize)]
struct SoundData<'a> {
    text: &'a str,
    voice: &'a str,
}

#[derive(Debug, Deserialize)]
struct SoundResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// soundoftext.com client that plays clips through an external command
#[derive(Debug, Clone)]
pub struct SoundOfText {
    client: reqwest::blocking::Client,
    audio_dir: PathBuf,
    /// Player program and its leading arguments; the clip path is appended
    command: Vec<String>,
}

impl SoundOfText {
    pub fn new(
        audio_dir: impl Into<PathBuf>,
        command: Vec<String>,
        timeout: Duration,
    ) -> Result<Self, ServiceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("lingo/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            audio_dir: audio_dir.into(),
            command,
        })
    }

    /// Local path the clip for `word` is downloaded to
    pub fn clip_path(&self, word: &str) -> PathBuf {
        self.audio_dir.join(format!("{}.mp3", clip_name(word)))
    }

    fn request_sound(&self, word: &str, voice: &str) -> Result<String, ServiceError> {
        let request = SoundRequest {
            engine: "Google",
            data: SoundData { text: word, voice },
        };
        let response: SoundResponse = self
            .client
            .post(SOUNDS_URL)
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;
        sound_id(response)
    }

    fn download(&self, url: &str, path: &Path) -> Result<(), ServiceError> {
        let mut attempt = 1;
        let bytes = loop {
            let response = self.client.get(url).send()?;
            if response.status().is_success() {
                break response.bytes()?;
            }
            if attempt >= DOWNLOAD_ATTEMPTS {
                return Err(ServiceError::Status(response.status().as_u16()));
            }
            tracing::debug!("Clip not ready (attempt {}): {}", attempt, response.status());
            attempt += 1;
            thread::sleep(DOWNLOAD_RETRY_DELAY);
        };

        fs::create_dir_all(&self.audio_dir)?;
        fs::write(path, &bytes)?;
        Ok(())
    }
}

impl AudioPlayer for SoundOfText {
    fn fetch(&self, word: &str, voice: &str) -> Result<PathBuf, ServiceError> {
        let id = self.request_sound(word, voice)?;
        let url = format!("{}/{}.mp3", FILES_URL, id);
        let path = self.clip_path(word);
        self.download(&url, &path)?;
        tracing::debug!("Downloaded {:?} ({}) to {}", word, voice, path.display());
        Ok(path)
    }

    fn play(&self, path: &Path) -> Result<(), ServiceError> {
        let Some((program, args)) = self.command.split_first() else {
            return Err(ServiceError::Player("no audio command configured".to_string()));
        };

        let output = Command::new(program)
            .args(args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ServiceError::Player(format!("{}: {}", program, e)))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = stderr.lines().next().unwrap_or_default().trim().to_string();
            Err(ServiceError::Player(if detail.is_empty() {
                format!("{} exited with {}", program, output.status)
            } else {
                detail
            }))
        }
    }

    fn delete(&self, path: &Path) -> Result<(), ServiceError> {
        fs::remove_file(path)?;
        Ok(())
    }
}

fn sound_id(response: SoundResponse) -> Result<String, ServiceError> {
    match response.id {
        Some(id) if response.success && !id.is_empty() => Ok(id),
        _ => Err(ServiceError::Response(
            response
                .message
                .unwrap_or_else(|| "no sound id in response".to_string()),
        )),
    }
}

/// File name for a word's clip with path separators and control characters removed
fn clip_name(word: &str) -> String {
    let name: String = word
        .chars()
        .map(|c| {
            if std::path::is_separator(c) || c.is_control() || c == '.' {
                '_'
            } else {
                c
            }
        })
        .collect();
    if name.is_empty() {
        "_".to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tempfile::TempDir;

    #[test]
    fn test_clip_name_is_a_single_component() {
        assert_eq!(clip_name("привет"), "привет");
        assert_eq!(clip_name("a/b"), "a_b");
        assert_eq!(clip_name(".."), "__");
        assert_eq!(clip_name(""), "_");
    }

    #[test]
    fn test_request_body_shape() {
        let request = SoundRequest {
            engine: "Google",
            data: SoundData {
                text: "你",
                voice: "cmn-Hant-TW",
            },
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"engine":"Google","data":{"text":"你","voice":"cmn-Hant-TW"}}"#
        );
    }

    #[test]
    fn test_sound_id() {
        let ok: SoundResponse = serde_json::from_str(r#"{"success":true,"id":"abc"}"#).unwrap();
        assert_eq!(sound_id(ok).unwrap(), "abc");

        let refused: SoundResponse =
            serde_json::from_str(r#"{"success":false,"message":"invalid voice"}"#).unwrap();
        assert_eq!(
            sound_id(refused),
            Err(ServiceError::Response("invalid voice".to_string()))
        );
    }

    #[test]
    fn test_play_without_command() {
        let dir = TempDir::new().unwrap();
        let player = SoundOfText::new(dir.path(), Vec::new(), Duration::from_secs(1)).unwrap();
        assert!(matches!(
            player.play(&dir.path().join("x.mp3")),
            Err(ServiceError::Player(_))
        ));
    }

    struct RecordingPlayer {
        dir: PathBuf,
        fail_play: bool,
        deleted: RefCell<Vec<PathBuf>>,
    }

    impl AudioPlayer for RecordingPlayer {
        fn fetch(&self, word: &str, _voice: &str) -> Result<PathBuf, ServiceError> {
            Ok(self.dir.join(format!("{}.mp3", word)))
        }

        fn play(&self, _path: &Path) -> Result<(), ServiceError> {
            if self.fail_play {
                Err(ServiceError::Player("boom".to_string()))
            } else {
                Ok(())
            }
        }

        fn delete(&self, path: &Path) -> Result<(), ServiceError> {
            self.deleted.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn test_pronounce_deletes_even_when_playback_fails() {
        let player = RecordingPlayer {
            dir: PathBuf::from("/tmp/audio"),
            fail_play: true,
            deleted: RefCell::new(Vec::new()),
        };
        assert!(player.pronounce("gato", "es-ES").is_err());
        assert_eq!(
            player.deleted.borrow().as_slice(),
            &[PathBuf::from("/tmp/audio/gato.mp3")]
        );
    }
}
