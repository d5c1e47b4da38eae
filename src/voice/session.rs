//! One listen/transcribe/route cycle, with the notices the user sees along the way.

use super::{Dispatch, VoiceRouter};
use crate::i18n::Localizer;
use kisan_core::{
    error::KisanError,
    notice::Notice,
    traits::{Notifier, Transcriber},
};
use std::sync::Arc;
use tracing::{info, warn};

/// How long the "listening" notice stays up.
const LISTENING_NOTICE_MS: u64 = 2000;

/// Feeds transcripts from a [`Transcriber`] into a [`VoiceRouter`].
pub struct VoiceSession {
    transcriber: Arc<dyn Transcriber>,
    notifier: Arc<dyn Notifier>,
    router: VoiceRouter,
    notice_duration_ms: u64,
}

impl VoiceSession {
    pub fn new(
        transcriber: Arc<dyn Transcriber>,
        notifier: Arc<dyn Notifier>,
        router: VoiceRouter,
        notice_duration_ms: u64,
    ) -> Self {
        Self {
            transcriber,
            notifier,
            router,
            notice_duration_ms,
        }
    }

    /// Tell the user the microphone is open.
    pub fn start_listening(&self, localizer: &Localizer) {
        self.notifier.show(Notice::info(
            localizer.t("voice.listening"),
            localizer.t("voice.pleaseSpeak"),
            LISTENING_NOTICE_MS,
        ));
    }

    /// Transcribe `audio` in the active language and route the result.
    ///
    /// Returns `None` when transcription failed; the failure has already been
    /// shown to the user and is not retried.
    pub async fn handle_audio(&self, audio: &[u8], localizer: &Localizer) -> Option<Dispatch> {
        let language_code = localizer.language_code();
        match self.transcriber.transcribe(audio, language_code).await {
            Ok(transcript) => {
                info!("voice transcription: {transcript}");
                self.notifier.show(Notice::info(
                    localizer.t("voice.understood"),
                    you_said(localizer, &transcript),
                    self.notice_duration_ms,
                ));
                Some(self.router.handle(&transcript, localizer))
            }
            Err(e) => {
                warn!("voice: {} transcription failed: {e}", self.transcriber.name());
                self.notifier.show(Notice::destructive(
                    localizer.t("voice.sorry"),
                    localizer.t(transcription_error_key(&e)),
                    self.notice_duration_ms,
                ));
                None
            }
        }
    }
}

/// Notice body echoing what was heard.
fn you_said(localizer: &Localizer, transcript: &str) -> String {
    format!("{}: \"{transcript}\"", localizer.t("voice.youSaid"))
}

/// "Not supported" when the device cannot listen, a retry hint otherwise.
fn transcription_error_key(error: &KisanError) -> &'static str {
    if error.is_voice_unavailable() {
        "voice.notSupported"
    } else {
        "voice.errorUnderstanding"
    }
}
