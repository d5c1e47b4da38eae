//! Deterministic transcriber used when no speech engine is configured.

use async_trait::async_trait;
use kisan_core::{error::KisanError, language::FALLBACK_REGION_CODE, traits::Transcriber};
use tracing::debug;

/// "My crop has disease", per region code.
const MOCK_TRANSCRIPTIONS: &[(&str, &str)] = &[
    ("hi-IN", "मेरी फसल में बीमारी है"),
    ("en-IN", "My crop has disease"),
    ("kn-IN", "ನನ್ನ ಬೆಳೆಗೆ ರೋಗವಿದೆ"),
    ("ta-IN", "என் பயிரில் நோய் உள்ளது"),
    ("te-IN", "నా పంటలో వ్యాధి ఉంది"),
    ("mr-IN", "माझ्या पिकात रोग आहे"),
    ("bn-IN", "আমার ফসলে রোগ আছে"),
    ("gu-IN", "મારા પાકમાં રોગ છે"),
];

/// Ignores the audio and returns a canned utterance in the requested language.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockTranscriber;

impl MockTranscriber {
    fn lookup(language_code: &str) -> Option<&'static str> {
        MOCK_TRANSCRIPTIONS
            .iter()
            .find(|(code, _)| *code == language_code)
            .map(|(_, text)| *text)
    }

    /// Canned utterance for `language_code`; Hindi when the code is unknown.
    pub fn utterance(language_code: &str) -> &'static str {
        Self::lookup(language_code)
            .or_else(|| Self::lookup(FALLBACK_REGION_CODE))
            .unwrap_or_default()
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    fn name(&self) -> &str {
        "mock"
    }

    async fn transcribe(&self, audio: &[u8], language_code: &str) -> Result<String, KisanError> {
        debug!(
            "mock transcriber: ignoring {} bytes of audio ({language_code})",
            audio.len()
        );
        Ok(Self::utterance(language_code).to_string())
    }
}
