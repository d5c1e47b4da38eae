//! Terminal implementations of the speech, navigation, and notice collaborators.

use crate::voice::KNOWN_PATHS;
use async_trait::async_trait;
use kisan_core::{
    error::KisanError,
    notice::{Notice, Severity},
    traits::{Navigator, Notifier, Speaker},
};
use std::sync::Mutex;
use tracing::debug;

/// Prints what would be spoken. Reports "unsupported" when speech is disabled.
pub struct ConsoleSpeaker {
    enabled: bool,
}

impl ConsoleSpeaker {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait]
impl Speaker for ConsoleSpeaker {
    fn name(&self) -> &str {
        "console"
    }

    async fn speak(&self, text: &str, language_code: &str) -> Result<(), KisanError> {
        if !self.enabled {
            return Err(KisanError::VoiceUnsupported(
                "speech output disabled in config".into(),
            ));
        }
        println!("🔊 [{language_code}] {text}");
        Ok(())
    }
}

/// Tracks the current screen and prints each move.
pub struct ConsoleNavigator {
    current: Mutex<String>,
}

impl ConsoleNavigator {
    pub fn new() -> Self {
        Self {
            current: Mutex::new("/".to_string()),
        }
    }

    pub fn current(&self) -> String {
        self.current
            .lock()
            .map(|p| p.clone())
            .unwrap_or_else(|e| e.into_inner().clone())
    }
}

impl Default for ConsoleNavigator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Navigator for ConsoleNavigator {
    async fn go_to(&self, path: &str) -> Result<(), KisanError> {
        if !KNOWN_PATHS.contains(&path) {
            return Err(KisanError::Navigation(format!("unknown screen: {path}")));
        }
        let mut current = self
            .current
            .lock()
            .map_err(|_| KisanError::Navigation("navigator state poisoned".into()))?;
        debug!("navigate: {} -> {path}", *current);
        *current = path.to_string();
        println!("→ {path}");
        Ok(())
    }
}

/// Prints notices as one line each.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn show(&self, notice: Notice) {
        let marker = match notice.severity {
            Severity::Info => "ℹ",
            Severity::Destructive => "✗",
        };
        println!("{marker} {}: {}", notice.title, notice.body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_navigator_tracks_known_paths() {
        let nav = ConsoleNavigator::new();
        assert_eq!(nav.current(), "/");
        nav.go_to("/market-prices").await.unwrap();
        assert_eq!(nav.current(), "/market-prices");
    }

    #[tokio::test]
    async fn test_navigator_rejects_unknown_path() {
        let nav = ConsoleNavigator::new();
        let err = nav.go_to("/weather").await.unwrap_err();
        assert!(matches!(err, KisanError::Navigation(_)));
        assert_eq!(nav.current(), "/");
    }

    #[tokio::test]
    async fn test_disabled_speaker_reports_unsupported() {
        let speaker = ConsoleSpeaker::new(false);
        let err = speaker.speak("नमस्ते", "hi-IN").await.unwrap_err();
        assert!(err.is_voice_unavailable());
        assert!(ConsoleSpeaker::new(true).speak("hi", "en-IN").await.is_ok());
    }
}
