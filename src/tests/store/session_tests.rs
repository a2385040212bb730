use super::*;

#[test]
fn missing_file_reads_as_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path());

    let st = store.read_state().unwrap();
    assert_eq!(st.version, 1);
    assert!(st.token.is_none());
    assert!(store.credential().unwrap().is_none());
}

#[test]
fn write_then_credential_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path());
    store.write("abc", "alice").unwrap();

    let cred = store.credential().unwrap().unwrap();
    assert_eq!(cred.token, "abc");
    assert_eq!(cred.display_identity(), "alice");

    let st = store.read_state().unwrap();
    assert!(st.logged_in_at.is_some());
}

#[test]
fn token_without_identity_falls_back_to_user() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path());
    std::fs::write(store.path(), br#"{"version":1,"token":"abc"}"#).unwrap();

    let cred = store.credential().unwrap().unwrap();
    assert!(cred.identity.is_none());
    assert_eq!(cred.display_identity(), "user");
}

#[test]
fn empty_token_is_no_credential() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path());
    std::fs::write(store.path(), br#"{"version":1,"token":"","user":"bob"}"#).unwrap();

    assert!(store.credential().unwrap().is_none());
}

#[test]
fn clear_removes_token_and_identity_together() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path());
    store.write("abc", "alice").unwrap();

    store.clear().unwrap();
    assert!(!store.path().exists());
    assert!(store.read_state().unwrap().user.is_none());

    // Clearing twice is fine.
    store.clear().unwrap();
}

#[test]
fn unknown_version_is_a_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path());
    std::fs::write(store.path(), br#"{"version":2,"token":"abc"}"#).unwrap();

    let err = store.read_state().unwrap_err();
    assert!(matches!(err, ConsoleError::Storage { .. }));
}
