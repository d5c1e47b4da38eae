use super::*;

#[test]
fn test_defaults_when_sections_missing() {
    let cfg: Config = toml::from_str("").unwrap();
    assert_eq!(cfg.kisan.name, "Kisan AI");
    assert_eq!(cfg.language.default, "hi");
    assert_eq!(cfg.language.storage_key, "kisan_language");
    assert_eq!(cfg.memory.db_path, "~/.kisan/preferences.db");
    assert!(cfg.voice.speech_enabled);
    assert_eq!(cfg.voice.notice_duration_ms, 3000);
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let toml_str = r#"
        [language]
        default = "kn"

        [voice]
        speech_enabled = false
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.language.default, "kn");
    assert_eq!(cfg.language.storage_key, "kisan_language");
    assert_eq!(cfg.language.overlay_file, "TRANSLATIONS.toml");
    assert!(!cfg.voice.speech_enabled);
    assert_eq!(cfg.voice.notice_duration_ms, 3000);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let cfg = load("/nonexistent/__kisan_config__.toml").unwrap();
    assert_eq!(cfg.kisan.data_dir, "~/.kisan");
    assert_eq!(cfg.kisan.log_level, "info");
}

#[test]
fn test_load_rejects_malformed_file() {
    let tmp = std::env::temp_dir().join(format!("__kisan_bad_config_{}__.toml", std::process::id()));
    std::fs::write(&tmp, "[language\ndefault = ").unwrap();
    let err = load(tmp.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, KisanError::Config(_)));
    let _ = std::fs::remove_file(&tmp);
}

#[test]
fn test_load_unreadable_path_is_io_error() {
    let dir = std::env::temp_dir();
    let err = load(dir.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, KisanError::Io(_)));
}

#[test]
fn test_overlay_path_joins_data_dir() {
    let mut cfg = Config::default();
    cfg.kisan.data_dir = "/srv/kisan".to_string();
    assert_eq!(cfg.overlay_path(), "/srv/kisan/TRANSLATIONS.toml");
}

#[test]
fn test_shellexpand_leaves_absolute_paths() {
    assert_eq!(shellexpand("/tmp/x.db"), "/tmp/x.db");
    assert_eq!(shellexpand(":memory:"), ":memory:");
}
