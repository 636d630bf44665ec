use std::rc::Rc;

use super::*;
use crate::net::types::{Role, User};
use crate::util::storage::{MemoryStorage, StorageBackend};

fn user() -> User {
    User {
        id: 7,
        name: "Amaka Obi".to_owned(),
        email: "amaka@clinic.test".to_owned(),
        role: Role::Doctor,
    }
}

fn store() -> (Rc<MemoryStorage>, SessionStore) {
    let backend = Rc::new(MemoryStorage::default());
    (Rc::clone(&backend), SessionStore::new(backend))
}

// =============================================================
// save / load
// =============================================================

#[test]
fn save_then_load_round_trips() {
    let (_, store) = store();
    store.save("tok-123", &user()).expect("save");

    let session = store.load().expect("session");
    assert_eq!(session.token, "tok-123");
    assert_eq!(session.user, user());
}

#[test]
fn load_with_empty_storage_is_none() {
    let (_, store) = store();
    assert!(store.load().is_none());
}

#[test]
fn load_with_token_but_no_user_is_none() {
    let (backend, store) = store();
    backend.set(TOKEN_KEY, "tok-123").expect("set");
    assert!(store.load().is_none());
}

#[test]
fn load_with_user_but_no_token_is_none() {
    let (backend, store) = store();
    let encoded = serde_json::to_string(&user()).expect("encode");
    backend.set(USER_KEY, &encoded).expect("set");
    assert!(store.load().is_none());
}

#[test]
fn load_with_corrupt_user_is_none() {
    let (backend, store) = store();
    backend.set(TOKEN_KEY, "tok-123").expect("set");
    backend.set(USER_KEY, "{not valid json").expect("set");
    assert!(store.load().is_none());
}

#[test]
fn load_with_unknown_role_is_none() {
    let (backend, store) = store();
    backend.set(TOKEN_KEY, "tok-123").expect("set");
    backend
        .set(
            USER_KEY,
            r#"{"id":1,"name":"N","email":"n@clinic.test","role":"nurse"}"#,
        )
        .expect("set");
    assert!(store.load().is_none());
}

#[test]
fn save_overwrites_previous_session() {
    let (_, store) = store();
    store.save("tok-old", &user()).expect("save");
    store.save("tok-new", &user()).expect("save");

    let session = store.load().expect("session");
    assert_eq!(session.token, "tok-new");
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_removes_both_entries() {
    let (backend, store) = store();
    store.save("tok-123", &user()).expect("save");
    store.clear();

    assert!(backend.get(TOKEN_KEY).is_none());
    assert!(backend.get(USER_KEY).is_none());
    assert!(store.load().is_none());
}

#[test]
fn clear_is_idempotent() {
    let (backend, store) = store();
    store.save("tok-123", &user()).expect("save");
    store.clear();
    store.clear();

    assert!(backend.get(TOKEN_KEY).is_none());
    assert!(backend.get(USER_KEY).is_none());
}

#[test]
fn clear_on_empty_store_is_a_noop() {
    let (_, store) = store();
    store.clear();
    assert!(store.load().is_none());
}

// =============================================================
// cross-tab invalidation
// =============================================================

#[test]
fn token_removed_in_other_tab_is_external_logout() {
    assert!(is_external_logout(Some(TOKEN_KEY), None));
}

#[test]
fn token_replaced_in_other_tab_is_not_logout() {
    // New tokens never propagate across tabs, only invalidation.
    assert!(!is_external_logout(Some(TOKEN_KEY), Some("tok-new")));
}

#[test]
fn other_key_removed_is_not_logout() {
    assert!(!is_external_logout(Some(USER_KEY), None));
    assert!(!is_external_logout(Some("theme"), None));
}

#[test]
fn storage_clear_event_is_not_logout() {
    // A wholesale storage.clear() fires with a null key.
    assert!(!is_external_logout(None, None));
}
