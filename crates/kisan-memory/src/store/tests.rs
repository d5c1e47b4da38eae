use super::*;
use std::sync::atomic::{AtomicU64, Ordering};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Path to a fresh on-disk database (unique per call).
fn test_db_path() -> String {
    let id = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!(
        "__kisan_store_test_{}_{}__",
        std::process::id(),
        id
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir.join("prefs.db").to_string_lossy().to_string()
}

async fn test_store() -> Store {
    let config = MemoryConfig {
        db_path: test_db_path(),
    };
    Store::new(&config).await.unwrap()
}

#[tokio::test]
async fn test_get_missing_preference() {
    let store = test_store().await;
    assert_eq!(store.get_preference("kisan_language").await.unwrap(), None);
}

#[tokio::test]
async fn test_store_and_overwrite_preference() {
    let store = test_store().await;
    store.store_preference("kisan_language", "kn").await.unwrap();
    assert_eq!(
        store.get_preference("kisan_language").await.unwrap().as_deref(),
        Some("kn")
    );

    store.store_preference("kisan_language", "ta").await.unwrap();
    assert_eq!(
        store.get_preference("kisan_language").await.unwrap().as_deref(),
        Some("ta")
    );
    assert_eq!(store.get_preferences().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_preference() {
    let store = test_store().await;
    store.store_preference("kisan_language", "mr").await.unwrap();
    assert!(store.delete_preference("kisan_language").await.unwrap());
    assert!(!store.delete_preference("kisan_language").await.unwrap());
    assert_eq!(store.get_preference("kisan_language").await.unwrap(), None);
}

#[tokio::test]
async fn test_preferences_survive_reopen() {
    let config = MemoryConfig {
        db_path: test_db_path(),
    };
    {
        let store = Store::new(&config).await.unwrap();
        store.set("kisan_language", "gu").await.unwrap();
        store.pool.close().await;
    }
    // Migrations are tracked, so reopening must not fail or wipe data.
    let reopened = Store::new(&config).await.unwrap();
    assert_eq!(
        reopened.get("kisan_language").await.unwrap().as_deref(),
        Some("gu")
    );
}

#[tokio::test]
async fn test_get_preferences_sorted() {
    let store = test_store().await;
    store.store_preference("z_key", "1").await.unwrap();
    store.store_preference("a_key", "2").await.unwrap();
    let prefs = store.get_preferences().await.unwrap();
    assert_eq!(
        prefs,
        vec![
            ("a_key".to_string(), "2".to_string()),
            ("z_key".to_string(), "1".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_new_fails_when_data_dir_is_a_file() {
    let blocker = std::env::temp_dir().join(format!(
        "__kisan_store_blocker_{}__",
        std::process::id()
    ));
    std::fs::write(&blocker, "not a directory").unwrap();
    let config = MemoryConfig {
        db_path: blocker.join("prefs.db").to_string_lossy().to_string(),
    };
    let err = Store::new(&config).await.err().unwrap();
    assert!(matches!(err, KisanError::Io(_)));
    let _ = std::fs::remove_file(&blocker);
}
