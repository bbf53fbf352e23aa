//! File-backed session store

use chrono::TimeDelta;
use tempfile::TempDir;
use teamgrade::adapters::FileSessionStore;
use teamgrade::core::models::{Permission, RoleType};
use teamgrade::core::ports::{Cipher, SessionStore};

/// Reverses values so tests can tell stored text from plain text
struct Reverse;

impl Cipher for Reverse {
    fn encrypt(&self, plain: &str) -> String {
        plain.chars().rev().collect()
    }

    fn decrypt(&self, cipher: &str) -> Option<String> {
        Some(cipher.chars().rev().collect())
    }
}

#[test]
fn test_values_round_trip_through_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("session.toml");
    let store = FileSessionStore::new(&path);

    store.set_token("jwt").unwrap();
    store.set_project_id(3).unwrap();
    store.set_user_id(7).unwrap();
    store.set_role(RoleType::SupervisingStaff).unwrap();
    store
        .set_permissions(&[Permission("ADD_GRADE".to_string())])
        .unwrap();

    let reopened = FileSessionStore::new(&path);
    assert_eq!(reopened.token().as_deref(), Some("jwt"));
    assert_eq!(reopened.project_id(), Some(3));
    assert_eq!(reopened.user_id(), Some(7));
    assert_eq!(reopened.role(), Some(RoleType::SupervisingStaff));
    assert_eq!(reopened.permissions(), vec![Permission("ADD_GRADE".to_string())]);
    assert_eq!(reopened.auth_context().project_param(), "3");
}

#[test]
fn test_expired_values_read_as_absent() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.toml");
    let store = FileSessionStore::new(&path).with_ttl(TimeDelta::seconds(-1));

    store.set_token("stale").unwrap();

    assert_eq!(store.token(), None);
}

#[test]
fn test_expired_entries_pruned_on_write() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.toml");
    FileSessionStore::new(&path)
        .with_ttl(TimeDelta::seconds(-1))
        .set_token("stale")
        .unwrap();

    FileSessionStore::new(&path).set_user_id(7).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(!content.contains("stale"));
    assert!(content.contains("user"));
}

#[test]
fn test_values_pass_through_cipher() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.toml");
    let store = FileSessionStore::with_cipher(&path, Box::new(Reverse));

    store.set_token("abc123").unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("321cba"));
    assert!(!content.contains("abc123"));
    assert_eq!(store.token().as_deref(), Some("abc123"));
}

#[test]
fn test_unreadable_file_reads_as_empty() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.toml");
    std::fs::write(&path, "not = [valid").unwrap();
    let store = FileSessionStore::new(&path);

    assert_eq!(store.token(), None);
    assert!(store.permissions().is_empty());
}

#[test]
fn test_remove_all_deletes_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.toml");
    let store = FileSessionStore::new(&path);
    store.set_token("jwt").unwrap();

    store.remove_all().unwrap();
    assert!(!path.exists());
    // second removal is a no-op
    store.remove_all().unwrap();
    assert_eq!(store.token(), None);
}

#[cfg(unix)]
#[test]
fn test_session_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.toml");
    let store = FileSessionStore::new(&path);

    store.set_token("jwt").unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
