//! Supported languages and their display metadata.

use serde::{Deserialize, Serialize};

/// Region code handed to speech services when the active code is unknown.
pub const FALLBACK_REGION_CODE: &str = "hi-IN";

/// Display name used when the requested code is unknown.
pub const FALLBACK_NATIVE_NAME: &str = "हिंदी";

/// Languages the assistant ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "kn")]
    Kannada,
    #[serde(rename = "ta")]
    Tamil,
    #[serde(rename = "te")]
    Telugu,
    #[serde(rename = "mr")]
    Marathi,
    #[serde(rename = "bn")]
    Bengali,
    #[serde(rename = "gu")]
    Gujarati,
}

/// One row of the language picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub native_name: &'static str,
    pub english_name: &'static str,
}

impl LanguageInfo {
    const fn of(lang: Language) -> Self {
        Self {
            code: lang.code(),
            native_name: lang.native_name(),
            english_name: lang.english_name(),
        }
    }
}

/// Languages in picker display order. Hindi comes first.
pub const AVAILABLE_LANGUAGES: &[LanguageInfo] = &[
    LanguageInfo::of(Language::Hindi),
    LanguageInfo::of(Language::English),
    LanguageInfo::of(Language::Kannada),
    LanguageInfo::of(Language::Tamil),
    LanguageInfo::of(Language::Telugu),
    LanguageInfo::of(Language::Marathi),
    LanguageInfo::of(Language::Bengali),
    LanguageInfo::of(Language::Gujarati),
];

impl Language {
    /// Every language, in declaration order.
    pub const ALL: [Language; 8] = [
        Language::English,
        Language::Hindi,
        Language::Kannada,
        Language::Tamil,
        Language::Telugu,
        Language::Marathi,
        Language::Bengali,
        Language::Gujarati,
    ];

    /// Two-letter code, as persisted and as used in translation records.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Kannada => "kn",
            Self::Tamil => "ta",
            Self::Telugu => "te",
            Self::Marathi => "mr",
            Self::Bengali => "bn",
            Self::Gujarati => "gu",
        }
    }

    /// Region-qualified code for speech services.
    pub const fn region_code(self) -> &'static str {
        match self {
            Self::English => "en-IN",
            Self::Hindi => "hi-IN",
            Self::Kannada => "kn-IN",
            Self::Tamil => "ta-IN",
            Self::Telugu => "te-IN",
            Self::Marathi => "mr-IN",
            Self::Bengali => "bn-IN",
            Self::Gujarati => "gu-IN",
        }
    }

    /// Name of the language in its own script.
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "हिंदी",
            Self::Kannada => "ಕನ್ನಡ",
            Self::Tamil => "தமிழ்",
            Self::Telugu => "తెలుగు",
            Self::Marathi => "मराठी",
            Self::Bengali => "বাংলা",
            Self::Gujarati => "ગુજરાતી",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Kannada => "Kannada",
            Self::Tamil => "Tamil",
            Self::Telugu => "Telugu",
            Self::Marathi => "Marathi",
            Self::Bengali => "Bengali",
            Self::Gujarati => "Gujarati",
        }
    }

    /// Parse a two-letter code. Exact match only; `None` for anything else.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

/// Region code for an arbitrary (possibly invalid) language code.
pub fn region_code_for(code: &str) -> &'static str {
    Language::from_code(code)
        .map(Language::region_code)
        .unwrap_or(FALLBACK_REGION_CODE)
}

/// Native display name for an arbitrary (possibly invalid) language code.
pub fn native_name_for(code: &str) -> &'static str {
    Language::from_code(code)
        .map(Language::native_name)
        .unwrap_or(FALLBACK_NATIVE_NAME)
}
