use std::fs;
use tempfile::TempDir;
use textstore::logging::{init_logging, LogSettings, TracingLogger};
use textstore::storage::memory::MemStorage;
use textstore::store::TextStore;

// The subscriber is process-wide, so everything that depends on it lives in
// this single test.
#[test]
fn test_persistent_events_reach_log_file_only() {
    let dir = TempDir::new().unwrap();
    let log_file = dir.path().join("logs").join("log.txt");
    let settings = LogSettings {
        log_file: log_file.clone(),
        level: "info".to_string(),
    };
    init_logging(&settings).unwrap();
    // second call is a no-op
    init_logging(&settings).unwrap();

    let store = TextStore::open("example.txt", MemStorage::new(), TracingLogger).unwrap();

    store.storage().set_fail_appends(true);
    assert!(store.append("x").is_err());
    store.storage().set_fail_appends(false);

    store.write("Hello").unwrap();
    assert!(store.append_unique("Hello").is_err());

    let logged = fs::read_to_string(&log_file).unwrap();
    assert!(logged.contains("CorruptedResource: append failure"));
    assert!(logged.contains("ERROR"));
    assert!(!logged.contains("DuplicateContent"));
}
