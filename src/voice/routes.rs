//! Static routing data for voice commands.
//!
//! Rows are evaluated top to bottom and the first match wins, so the order of
//! [`ROUTES`] is part of the behavior.

use super::VoiceIntent;
use kisan_core::language::Language;

/// Translation key spoken and shown when nothing matches.
pub(super) const GUIDANCE_KEY: &str = "voice.askAbout";

/// Title of the notice shown when nothing matches.
pub(super) const NOT_UNDERSTOOD_KEY: &str = "voice.commandNotUnderstood";

/// Every screen the assistant can navigate to.
pub const KNOWN_PATHS: &[&str] = &[
    "/",
    "/crop-diagnosis",
    "/market-prices",
    "/government-schemes",
    "/my-farm",
];

/// One intent with the keywords that select it.
pub(super) struct Route {
    pub intent: VoiceIntent,
    /// Checked for every active language.
    pub english: &'static [&'static str],
    /// Checked first for the active language, then all together when no route
    /// matched. Only Hindi and Kannada keyword sets exist.
    pub localized: &'static [(Language, &'static [&'static str])],
    /// Translation key of the spoken confirmation.
    pub response_key: &'static str,
    pub path: &'static str,
}

impl Route {
    /// Whether the lowercased transcript contains any keyword of this route.
    pub fn matches(&self, msg_lower: &str, active: Option<Language>) -> bool {
        if kw_match(msg_lower, self.english) {
            return true;
        }
        let Some(active) = active else {
            return false;
        };
        self.localized
            .iter()
            .filter(|(lang, _)| *lang == active)
            .any(|(_, keywords)| kw_match(msg_lower, keywords))
    }

    /// Whether the transcript contains a keyword of any language's set.
    pub fn matches_any_localized(&self, msg_lower: &str) -> bool {
        self.localized
            .iter()
            .any(|(_, keywords)| kw_match(msg_lower, keywords))
    }
}

/// Check if any keyword in the list is contained in the lowercased message.
fn kw_match(msg_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| msg_lower.contains(kw))
}

/// Intents in priority order.
pub(super) const ROUTES: &[Route] = &[
    Route {
        intent: VoiceIntent::CropDiagnosis,
        english: &["crop", "disease"],
        localized: &[(Language::Hindi, &["फसल"]), (Language::Kannada, &["ಬೆಳೆ"])],
        response_key: "crop.diagnosis",
        path: "/crop-diagnosis",
    },
    Route {
        intent: VoiceIntent::MarketPrices,
        english: &["price", "market"],
        localized: &[
            (Language::Hindi, &["बाजार"]),
            (Language::Kannada, &["ಮಾರುಕಟ್ಟೆ"]),
        ],
        response_key: "market.prices",
        path: "/market-prices",
    },
    Route {
        intent: VoiceIntent::GovernmentSchemes,
        english: &["scheme"],
        localized: &[(Language::Hindi, &["योजना"]), (Language::Kannada, &["ಯೋಜನೆ"])],
        response_key: "schemes.government",
        path: "/government-schemes",
    },
    Route {
        intent: VoiceIntent::MyFarm,
        english: &["farm"],
        localized: &[(Language::Hindi, &["खेत"]), (Language::Kannada, &["ಫಾರ್ಮ್"])],
        response_key: "farm.myFarm",
        path: "/my-farm",
    },
];
