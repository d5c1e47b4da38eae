//! Internationalization: the translation table and the active language.
//!
//! [`Localizer::translate`] resolves a key for the active language, falling
//! back to English and then to a caller-supplied literal. It never fails:
//! a missing key is logged and the fallback text is returned.
//! Supported languages: Hindi (default), English (fallback), Kannada, Tamil,
//! Telugu, Marathi, Bengali, Gujarati.

mod labels;
mod overlay;


pub use overlay::load_overlay;

use kisan_core::{
    config::LanguageConfig,
    error::KisanError,
    language::{self, Language, LanguageInfo, AVAILABLE_LANGUAGES},
    traits::PreferenceStore,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Per-language strings for one key.
pub type Record = HashMap<Language, String>;

/// Immutable key → per-language string mapping.
///
/// Every record holds a non-empty English entry; [`TranslationTable::insert`]
/// rejects records without one. Empty strings count as absent.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: HashMap<String, Record>,
}

impl TranslationTable {
    /// Table built from the strings compiled into the binary.
    pub fn bundled() -> Self {
        let mut table = Self::default();
        for (key, texts) in labels::ENTRIES {
            let record: Record = texts
                .iter()
                .map(|(lang, text)| (*lang, (*text).to_string()))
                .collect();
            if let Err(e) = table.insert(key, record) {
                warn!("i18n: bundled entry rejected: {e}");
            }
        }
        table
    }

    /// Add or replace a record. Empty texts are dropped; fails if no English
    /// text remains.
    pub fn insert(&mut self, key: &str, mut record: Record) -> Result<(), KisanError> {
        record.retain(|_, text| !text.is_empty());
        if !record.contains_key(&Language::English) {
            return Err(KisanError::Config(format!(
                "translation '{key}' has no English entry"
            )));
        }
        self.entries.insert(key.to_string(), record);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Record> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The session's active language code.
///
/// The code is kept as given: an unsupported code is stored and persisted
/// unchanged, and lookups for it fall through to English.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePreference {
    code: String,
    storage_key: String,
}

impl LanguagePreference {
    pub fn new(code: impl Into<String>, storage_key: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            storage_key: storage_key.into(),
        }
    }

    /// Read the persisted code, or use `default` when nothing is stored or the
    /// store cannot be read.
    pub async fn load(store: &dyn PreferenceStore, storage_key: &str, default: &str) -> Self {
        let code = match store.get(storage_key).await {
            Ok(Some(saved)) if !saved.is_empty() => saved,
            Ok(_) => default.to_string(),
            Err(e) => {
                warn!("i18n: could not read saved language, using '{default}': {e}");
                default.to_string()
            }
        };
        Self::new(code, storage_key)
    }

    /// Persist the current code under the storage key.
    pub async fn save(&self, store: &dyn PreferenceStore) -> Result<(), KisanError> {
        store.set(&self.storage_key, &self.code).await
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// The supported language this code names, if any.
    pub fn language(&self) -> Option<Language> {
        Language::from_code(&self.code)
    }
}

/// Translation table plus the active language for one session.
#[derive(Debug, Clone)]
pub struct Localizer {
    table: Arc<TranslationTable>,
    preference: LanguagePreference,
}

impl Localizer {
    pub fn new(table: Arc<TranslationTable>, preference: LanguagePreference) -> Self {
        Self { table, preference }
    }

    /// Start a session: restore the saved language from `store`.
    pub async fn load(
        table: Arc<TranslationTable>,
        store: &dyn PreferenceStore,
        config: &LanguageConfig,
    ) -> Self {
        let preference =
            LanguagePreference::load(store, &config.storage_key, &config.default).await;
        info!("i18n: active language '{}'", preference.code());
        Self::new(table, preference)
    }

    /// The raw active language code.
    pub fn current_language(&self) -> &str {
        self.preference.code()
    }

    pub fn preference(&self) -> &LanguagePreference {
        &self.preference
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Resolve `key` for the active language.
    ///
    /// Order: active language, then English, then `fallback`. The table holds no
    /// empty texts, so a blank entry falls through like a missing one. Unknown
    /// keys log a warning and return `fallback`.
    pub fn translate<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        let Some(record) = self.table.get(key) else {
            warn!("translation missing for key: {key}");
            return fallback;
        };
        self.preference
            .language()
            .and_then(|lang| record.get(&lang))
            .or_else(|| record.get(&Language::English))
            .map(String::as_str)
            .unwrap_or(fallback)
    }

    /// [`translate`](Self::translate) with the key itself as the fallback.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.translate(key, key)
    }

    /// Switch the active language and persist it.
    ///
    /// No validation: an unsupported code is accepted. If persisting fails the
    /// switch still applies for this session.
    pub async fn change_language(&mut self, code: &str, store: &dyn PreferenceStore) {
        self.preference.code = code.to_string();
        match self.preference.save(store).await {
            Ok(()) => info!("i18n: language changed to '{code}'"),
            Err(e) => warn!("i18n: language changed to '{code}' but not saved: {e}"),
        }
    }

    /// Region-tagged code for speech services (`hi` → `hi-IN`); `hi-IN` when unknown.
    pub fn language_code(&self) -> &'static str {
        language::region_code_for(self.current_language())
    }

    /// Native display name of `code`, or of the active language when `None`.
    /// Unknown codes give the Hindi name.
    pub fn language_name(&self, code: Option<&str>) -> &'static str {
        language::native_name_for(code.unwrap_or(self.current_language()))
    }

    /// Languages in picker display order.
    pub fn available_languages() -> &'static [LanguageInfo] {
        AVAILABLE_LANGUAGES
    }
}
