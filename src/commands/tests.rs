use super::*;
use crate::i18n::{LanguagePreference, TranslationTable};
use crate::test_support::{test_store, RecordingNavigator, RecordingNotifier, RecordingSpeaker};
use crate::voice::MockTranscriber;
use std::sync::Arc;

fn localizer(code: &str) -> Localizer {
    Localizer::new(
        Arc::new(TranslationTable::bundled()),
        LanguagePreference::new(code, "kisan_language"),
    )
}

#[test]
fn test_languages_marks_active() {
    let out = handle_languages(&localizer("kn"));
    assert!(out.starts_with("ಭಾಷೆ"));
    assert!(out.contains("* kn  ಕನ್ನಡ (Kannada)"));
    assert!(out.contains("  hi  हिंदी (Hindi)"));
    // Display order: Hindi before English.
    assert!(out.find("hi  ").unwrap() < out.find("en  ").unwrap());
}

#[tokio::test]
async fn test_language_show_and_set() {
    let store = test_store().await;
    let mut loc = localizer("hi");

    let shown = handle_language(&mut loc, &store, None).await;
    assert_eq!(shown, "भाषा: हिंदी (hi)");

    let set = handle_language(&mut loc, &store, Some("ta")).await;
    assert_eq!(set, "மொழி மாற்றப்பட்டது: தமிழ் (ta)");
    assert_eq!(
        store.get("kisan_language").await.unwrap().as_deref(),
        Some("ta")
    );
}

#[tokio::test]
async fn test_language_blank_argument_shows() {
    let store = test_store().await;
    let mut loc = localizer("en");
    let out = handle_language(&mut loc, &store, Some("  ")).await;
    assert_eq!(out, "Language: English (en)");
    assert_eq!(store.get("kisan_language").await.unwrap(), None);
}

#[test]
fn test_translate_with_and_without_fallback() {
    let loc = localizer("bn");
    assert_eq!(handle_translate(&loc, "nav.market", None), "বাজার");
    assert_eq!(handle_translate(&loc, "nav.weather", None), "nav.weather");
    assert_eq!(handle_translate(&loc, "nav.weather", Some("Weather")), "Weather");
}

#[test]
fn test_keys_sorted() {
    let out = handle_keys(&localizer("hi"));
    let keys: Vec<&str> = out.lines().collect();
    assert!(keys.contains(&"nav.home"));
    assert!(keys.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_voice_command_navigates() {
    let speaker = Arc::new(RecordingSpeaker::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let router = VoiceRouter::new(speaker.clone(), navigator.clone(), notifier, 3000);

    let intent = handle_voice(&router, &localizer("en"), "any scheme for me").await;
    assert_eq!(intent, VoiceIntent::GovernmentSchemes);
    assert_eq!(navigator.visited(), vec!["/government-schemes".to_string()]);
    assert_eq!(speaker.spoken()[0].0, "Government Schemes");
}

#[tokio::test]
async fn test_listen_routes_mock_utterance() {
    let speaker = Arc::new(RecordingSpeaker::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let router = VoiceRouter::new(speaker, navigator.clone(), notifier.clone(), 3000);
    let session = VoiceSession::new(Arc::new(MockTranscriber), notifier.clone(), router, 3000);

    let intent = handle_listen(&session, &localizer("kn"), &[]).await;
    assert_eq!(intent, Some(VoiceIntent::CropDiagnosis));
    assert_eq!(navigator.visited(), vec!["/crop-diagnosis".to_string()]);
    // Listening notice, then the transcript echo.
    assert_eq!(notifier.notices().len(), 2);
}
