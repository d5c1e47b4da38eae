#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::KisanError;

/// Top-level Kisan configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub kisan: KisanConfig,
    #[serde(default)]
    pub language: LanguageConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
    #[serde(default)]
    pub voice: VoiceConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KisanConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for KisanConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Language preference settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Language used when nothing has been persisted yet.
    #[serde(default = "default_language")]
    pub default: String,
    /// Preference key the active language is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Translation overlay, relative to `data_dir`. Missing file = bundled table only.
    #[serde(default = "default_overlay_file")]
    pub overlay_file: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            default: default_language(),
            storage_key: default_storage_key(),
            overlay_file: default_overlay_file(),
        }
    }
}

/// Preference store config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

/// Voice input/output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// When false, spoken confirmations are skipped (the speaker reports unsupported).
    #[serde(default = "default_true")]
    pub speech_enabled: bool,
    /// How long voice notices stay on screen.
    #[serde(default = "default_notice_duration")]
    pub notice_duration_ms: u64,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            speech_enabled: true,
            notice_duration_ms: default_notice_duration(),
        }
    }
}

// --- Default value functions ---

fn default_name() -> String {
    "Kisan AI".to_string()
}
fn default_data_dir() -> String {
    "~/.kisan".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_language() -> String {
    "hi".to_string()
}
fn default_storage_key() -> String {
    "kisan_language".to_string()
}
fn default_overlay_file() -> String {
    "TRANSLATIONS.toml".to_string()
}
fn default_db_path() -> String {
    "~/.kisan/preferences.db".to_string()
}
fn default_true() -> bool {
    true
}
fn default_notice_duration() -> u64 {
    3000
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

impl Config {
    /// Absolute path of the translation overlay file.
    pub fn overlay_path(&self) -> String {
        let dir = shellexpand(&self.kisan.data_dir);
        Path::new(&dir)
            .join(&self.language.overlay_file)
            .to_string_lossy()
            .into_owned()
    }
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, KisanError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| KisanError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
