//! User-supplied translation overlay (`TRANSLATIONS.toml`).
//!
//! ```toml
//! [translations."nav.home"]
//! en = "Home"
//! hi = "होम"
//! ```

use super::{Record, TranslationTable};
use kisan_core::language::Language;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// TOML structure for the overlay file.
#[derive(Deserialize)]
struct OverlayFile {
    #[serde(default)]
    translations: HashMap<String, HashMap<String, String>>,
}

/// Merge the overlay at `path` over `table`, replacing whole records.
///
/// A missing file is not an error. Empty strings count as absent; records
/// without English text are rejected and the existing record is kept. Returns how many records were
/// applied.
pub fn load_overlay(table: &mut TranslationTable, path: &str) -> usize {
    if !Path::new(path).exists() {
        debug!("i18n: no overlay at {path}");
        return 0;
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("i18n: failed to read {path}: {e}");
            return 0;
        }
    };

    match toml::from_str::<OverlayFile>(&content) {
        Ok(file) => {
            let applied = apply(table, file);
            info!("i18n: applied {applied} overlay translations from {path}");
            applied
        }
        Err(e) => {
            warn!("i18n: failed to parse {path}: {e}");
            0
        }
    }
}

fn apply(table: &mut TranslationTable, file: OverlayFile) -> usize {
    let mut applied = 0;
    for (key, texts) in file.translations {
        let mut record = Record::new();
        for (code, text) in texts {
            match Language::from_code(&code) {
                Some(lang) => {
                    record.insert(lang, text);
                }
                None => warn!("i18n: overlay '{key}' has unsupported language '{code}'"),
            }
        }
        let replaces = table.contains_key(&key);
        match table.insert(&key, record) {
            Ok(()) => {
                if replaces {
                    debug!("i18n: overlay replaces bundled '{key}'");
                }
                applied += 1;
            }
            Err(e) => warn!("i18n: overlay entry rejected: {e}"),
        }
    }
    applied
}
