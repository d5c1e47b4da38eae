use thiserror::Error;

/// Top-level error type for Kisan.
///
/// Collaborators return these; the localizer and the voice router absorb
/// them at their boundary so nothing reaches the user as a hard failure.
#[derive(Debug, Error)]
pub enum KisanError {
    /// No speech engine is available on this device.
    #[error("voice not supported: {0}")]
    VoiceUnsupported(String),

    /// Microphone or speech permission was refused.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Any other speech input/output failure.
    #[error("voice error: {0}")]
    Voice(String),

    /// Navigation target could not be reached.
    #[error("navigation error: {0}")]
    Navigation(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Preference storage error.
    #[error("store error: {0}")]
    Store(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl KisanError {
    /// Whether this error means voice features are unusable on this device,
    /// as opposed to a one-off recognition failure.
    pub fn is_voice_unavailable(&self) -> bool {
        matches!(self, Self::VoiceUnsupported(_) | Self::PermissionDenied(_))
    }
}
