use crate::{error::KisanError, notice::Notice};
use async_trait::async_trait;

/// Speech-to-text.
///
/// Implementations report `VoiceUnsupported` or `PermissionDenied` when the
/// device cannot listen at all; callers surface those and never retry.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Human-readable engine name.
    fn name(&self) -> &str;

    /// Turn recorded audio into text. `language_code` is region-tagged (`hi-IN`).
    async fn transcribe(&self, audio: &[u8], language_code: &str) -> Result<String, KisanError>;
}

/// Text-to-speech. Best effort: callers drop errors.
#[async_trait]
pub trait Speaker: Send + Sync {
    fn name(&self) -> &str;

    /// Speak `text` in the region-tagged `language_code`.
    async fn speak(&self, text: &str, language_code: &str) -> Result<(), KisanError>;
}

/// Moves the user to another screen.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn go_to(&self, path: &str) -> Result<(), KisanError>;
}

/// Shows transient notices. Fire-and-forget.
pub trait Notifier: Send + Sync {
    fn show(&self, notice: Notice);
}

/// Small persisted key/value store for user preferences.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, KisanError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), KisanError>;
}
