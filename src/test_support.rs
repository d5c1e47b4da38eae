//! Fakes shared by the unit tests.

use async_trait::async_trait;
use kisan_core::{
    config::MemoryConfig,
    error::KisanError,
    notice::Notice,
    traits::{Navigator, Notifier, PreferenceStore, Speaker, Transcriber},
};
use kisan_memory::Store;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Create a temporary on-disk store for testing (unique per call).
pub async fn test_store() -> Store {
    let id = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir =
        std::env::temp_dir().join(format!("__kisan_test_{}_{}__", std::process::id(), id));
    let _ = std::fs::remove_dir_all(&dir);
    let db_path = dir.join("test.db").to_string_lossy().to_string();
    Store::new(&MemoryConfig { db_path }).await.unwrap()
}

/// Store whose every call fails.
pub struct FailingStore;

#[async_trait]
impl PreferenceStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, KisanError> {
        Err(KisanError::Store("disk unavailable".into()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), KisanError> {
        Err(KisanError::Store("disk unavailable".into()))
    }
}

/// Records `(text, language_code)` for every call; optionally fails instead.
#[derive(Default)]
pub struct RecordingSpeaker {
    pub spoken: Mutex<Vec<(String, String)>>,
    pub unsupported: bool,
}

impl RecordingSpeaker {
    pub fn unsupported() -> Self {
        Self {
            unsupported: true,
            ..Default::default()
        }
    }

    pub fn spoken(&self) -> Vec<(String, String)> {
        self.spoken.lock().unwrap().clone()
    }
}

#[async_trait]
impl Speaker for RecordingSpeaker {
    fn name(&self) -> &str {
        "recording"
    }

    async fn speak(&self, text: &str, language_code: &str) -> Result<(), KisanError> {
        if self.unsupported {
            return Err(KisanError::VoiceUnsupported("no speech engine".into()));
        }
        self.spoken
            .lock()
            .unwrap()
            .push((text.to_string(), language_code.to_string()));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn go_to(&self, path: &str) -> Result<(), KisanError> {
        self.visited.lock().unwrap().push(path.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Navigator whose every move fails.
pub struct FailingNavigator;

#[async_trait]
impl Navigator for FailingNavigator {
    async fn go_to(&self, path: &str) -> Result<(), KisanError> {
        Err(KisanError::Navigation(format!("router detached, cannot reach {path}")))
    }
}

/// Transcriber that always fails with a fixed error kind.
pub enum FailingTranscriber {
    PermissionDenied,
    Unsupported,
    Garbled,
}

#[async_trait]
impl Transcriber for FailingTranscriber {
    fn name(&self) -> &str {
        "failing"
    }

    async fn transcribe(&self, _audio: &[u8], _language_code: &str) -> Result<String, KisanError> {
        Err(match self {
            Self::PermissionDenied => KisanError::PermissionDenied("microphone blocked".into()),
            Self::Unsupported => KisanError::VoiceUnsupported("no speech recognizer".into()),
            Self::Garbled => KisanError::Voice("no speech detected".into()),
        })
    }
}
