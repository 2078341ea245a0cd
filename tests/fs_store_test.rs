use std::fs;
use tempfile::TempDir;
use textstore::error::ErrorKind;
use textstore::logging::{LogDestination, MemoryLogger};
use textstore::storage::fs::FsStorage;
use textstore::store::TextStore;

fn setup() -> (TempDir, TextStore<FsStorage, MemoryLogger>) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("example.txt");
    let store = TextStore::open(path, FsStorage::new(), MemoryLogger::new()).unwrap();
    (dir, store)
}

#[test]
fn test_open_creates_directory_and_empty_file() {
    let (dir, store) = setup();

    assert!(dir.path().join("data").is_dir());
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "");
    assert_eq!(store.read().unwrap(), "");
}

#[test]
fn test_open_twice_keeps_content() {
    let (_dir, store) = setup();
    store.write("persisted").unwrap();

    let reopened = TextStore::open(store.path(), FsStorage::new(), MemoryLogger::new()).unwrap();
    assert_eq!(reopened.read().unwrap(), "persisted");
}

#[test]
fn test_write_truncates_and_append_accumulates() {
    let (_dir, store) = setup();

    store.write("a much longer first version").unwrap();
    store.write("t1").unwrap();
    store.append("t2").unwrap();

    assert_eq!(fs::read_to_string(store.path()).unwrap(), "t1t2");
}

#[test]
fn test_utf8_round_trip() {
    let (_dir, store) = setup();
    let text = "Олена Ступ.\nЩемапец лев.\n";

    store.write(text).unwrap();
    assert_eq!(store.read().unwrap(), text);
}

#[test]
fn test_demo_sequence_on_disk() {
    let (_dir, store) = setup();

    for line in ["44.\n", "hocu zhutu.\n"] {
        store.append_unique(line).unwrap();
    }
    let err = store.append_unique("hocu zhutu.").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateContent);

    let snapshot = store.read_and_save().unwrap();
    assert_eq!(snapshot, "44.\nhocu zhutu.\n");
    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "44.\nhocu zhutu.\n\nlol\n44.\nhocu zhutu.\n"
    );
}

#[test]
fn test_file_removed_behind_store_is_corrupted() {
    let (_dir, store) = setup();
    fs::remove_file(store.path()).unwrap();

    let err = store.read().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CorruptedResource);

    // append does not recreate the file either
    let err = store.append("x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CorruptedResource);
    assert!(!store.path().exists());

    let records = store.logger().records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].destination, LogDestination::Console);
    assert_eq!(records[1].destination, LogDestination::Persistent);
}

#[test]
fn test_invalid_utf8_on_disk_is_corrupted() {
    let (_dir, store) = setup();
    fs::write(store.path(), [0x48, 0x69, 0xff]).unwrap();

    let err = store.read().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CorruptedResource);
    assert_eq!(err.to_string(), "read failure");
}

#[test]
fn test_open_under_a_file_fails_with_storage_failure() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let result = TextStore::open(
        blocker.join("example.txt"),
        FsStorage::new(),
        MemoryLogger::new(),
    );
    match result {
        Err(err) => assert_eq!(err.kind(), ErrorKind::StorageFailure),
        Ok(_) => panic!("opening below a regular file should fail"),
    }
}
