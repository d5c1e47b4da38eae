//! CLI command handlers. Each returns the text to print.

#[cfg(test)]
mod tests;

use crate::i18n::Localizer;
use crate::voice::{Dispatch, VoiceIntent, VoiceRouter, VoiceSession};
use kisan_core::traits::PreferenceStore;
use tracing::debug;

/// List the picker languages in display order, marking the active one.
pub fn handle_languages(localizer: &Localizer) -> String {
    let mut out = format!("{}\n", localizer.t("settings.language"));
    for lang in Localizer::available_languages() {
        let marker = if lang.code == localizer.current_language() {
            "*"
        } else {
            " "
        };
        out.push_str(&format!(
            "\n{marker} {}  {} ({})",
            lang.code, lang.native_name, lang.english_name
        ));
    }
    out
}

/// Show the active language, or switch to `code` and persist it.
pub async fn handle_language(
    localizer: &mut Localizer,
    store: &dyn PreferenceStore,
    code: Option<&str>,
) -> String {
    match code.map(str::trim).filter(|c| !c.is_empty()) {
        None => format!(
            "{}: {} ({})",
            localizer.t("settings.language"),
            localizer.language_name(None),
            localizer.current_language()
        ),
        Some(code) => {
            localizer.change_language(code, store).await;
            format!(
                "{}: {} ({})",
                localizer.t("settings.languageChanged"),
                localizer.language_name(None),
                localizer.current_language()
            )
        }
    }
}

/// Resolve one key for the active language.
pub fn handle_translate(localizer: &Localizer, key: &str, fallback: Option<&str>) -> String {
    localizer.translate(key, fallback.unwrap_or(key)).to_string()
}

/// Every translation key, one per line.
pub fn handle_keys(localizer: &Localizer) -> String {
    localizer.table().keys().join("\n")
}

/// Route a typed transcript as if it had been spoken.
pub async fn handle_voice(
    router: &VoiceRouter,
    localizer: &Localizer,
    transcript: &str,
) -> VoiceIntent {
    settle(router.handle(transcript, localizer)).await
}

/// Run one listen cycle with `audio` as the recording. `None` when
/// transcription failed.
pub async fn handle_listen(
    session: &VoiceSession,
    localizer: &Localizer,
    audio: &[u8],
) -> Option<VoiceIntent> {
    session.start_listening(localizer);
    let dispatch = session.handle_audio(audio, localizer).await?;
    Some(settle(dispatch).await)
}

async fn settle(dispatch: Dispatch) -> VoiceIntent {
    let intent = dispatch.intent;
    debug!("voice: {intent:?} replied '{}'", dispatch.phrase);
    dispatch.settled().await;
    intent
}
