//! Voice commands: transcript classification and the side effects that follow.

mod mock;
mod routes;
mod session;


pub use mock::MockTranscriber;
pub use routes::KNOWN_PATHS;
pub use session::VoiceSession;

use crate::i18n::Localizer;
use kisan_core::{
    language::Language,
    notice::Notice,
    traits::{Navigator, Notifier, Speaker},
};
use routes::{GUIDANCE_KEY, NOT_UNDERSTOOD_KEY, ROUTES};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceIntent {
    CropDiagnosis,
    MarketPrices,
    GovernmentSchemes,
    MyFarm,
    Unrecognized,
}

impl VoiceIntent {
    /// Screen this intent navigates to; `None` for [`VoiceIntent::Unrecognized`].
    pub fn path(self) -> Option<&'static str> {
        ROUTES.iter().find(|r| r.intent == self).map(|r| r.path)
    }

    /// Translation key of the phrase spoken for this intent.
    pub fn response_key(self) -> &'static str {
        ROUTES
            .iter()
            .find(|r| r.intent == self)
            .map(|r| r.response_key)
            .unwrap_or(GUIDANCE_KEY)
    }
}

/// Classify a transcript. Routes are tried in priority order against the
/// English keywords and those of the `active` language; if none match, a
/// second pass tries every localized keyword set. First matching route wins.
pub fn classify(transcript: &str, active: Option<Language>) -> VoiceIntent {
    let msg_lower = transcript.to_lowercase();
    ROUTES
        .iter()
        .find(|route| route.matches(&msg_lower, active))
        .or_else(|| ROUTES.iter().find(|route| route.matches_any_localized(&msg_lower)))
        .map(|route| route.intent)
        .unwrap_or(VoiceIntent::Unrecognized)
}

/// Result of routing one transcript.
///
/// The side effects are already running when this is returned. Dropping it
/// leaves them running; [`Dispatch::settled`] waits for them.
#[derive(Debug)]
pub struct Dispatch {
    pub intent: VoiceIntent,
    /// Text handed to the speaker.
    pub phrase: String,
    tasks: Vec<JoinHandle<()>>,
}

impl Dispatch {
    /// Wait until the spawned speech and navigation tasks have finished.
    pub async fn settled(self) {
        for task in self.tasks {
            if let Err(e) = task.await {
                warn!("voice: side effect task failed: {e}");
            }
        }
    }
}

/// Routes transcripts to screens through the speech, navigation, and notice
/// collaborators.
#[derive(Clone)]
pub struct VoiceRouter {
    speaker: Arc<dyn Speaker>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    notice_duration_ms: u64,
}

impl VoiceRouter {
    pub fn new(
        speaker: Arc<dyn Speaker>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        notice_duration_ms: u64,
    ) -> Self {
        Self {
            speaker,
            navigator,
            notifier,
            notice_duration_ms,
        }
    }

    /// Classify `transcript` and fire the matching side effects.
    ///
    /// Recognized: speak the intent's phrase and navigate, concurrently and
    /// unordered. Unrecognized: show and speak the guidance phrase, no
    /// navigation. Never fails; collaborator errors are logged and dropped.
    /// Must be called within a Tokio runtime.
    pub fn handle(&self, transcript: &str, localizer: &Localizer) -> Dispatch {
        let active = localizer.preference().language();
        let intent = classify(transcript, active);
        let language_code = localizer.language_code();
        let mut tasks = Vec::with_capacity(2);

        let phrase = match intent.path() {
            Some(path) => {
                info!("voice: '{transcript}' -> {intent:?}");
                let phrase = localizer.t(intent.response_key()).to_string();
                tasks.push(self.spawn_speak(phrase.clone(), language_code));
                tasks.push(self.spawn_navigate(path));
                phrase
            }
            None => {
                info!("voice: command not understood: '{transcript}'");
                let phrase = localizer.t(GUIDANCE_KEY).to_string();
                self.notifier.show(Notice::info(
                    localizer.t(NOT_UNDERSTOOD_KEY),
                    phrase.as_str(),
                    self.notice_duration_ms,
                ));
                tasks.push(self.spawn_speak(phrase.clone(), language_code));
                phrase
            }
        };

        Dispatch {
            intent,
            phrase,
            tasks,
        }
    }

    fn spawn_speak(&self, text: String, language_code: &'static str) -> JoinHandle<()> {
        let speaker = Arc::clone(&self.speaker);
        tokio::spawn(async move {
            match speaker.speak(&text, language_code).await {
                Ok(()) => {}
                Err(e) if e.is_voice_unavailable() => {
                    debug!("voice: {} cannot speak: {e}", speaker.name());
                }
                Err(e) => warn!("voice: {} failed to speak: {e}", speaker.name()),
            }
        })
    }

    fn spawn_navigate(&self, path: &'static str) -> JoinHandle<()> {
        let navigator = Arc::clone(&self.navigator);
        tokio::spawn(async move {
            if let Err(e) = navigator.go_to(path).await {
                warn!("voice: navigation to {path} failed: {e}");
            }
        })
    }
}
