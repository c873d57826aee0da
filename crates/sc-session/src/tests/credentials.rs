use crate::{CredentialSource, StoredCredentials};

use sc_storage::{KeyValueStore, MemoryStore, keys};

#[test]
fn given_no_token_when_is_authenticated_then_false() {
    let credentials = StoredCredentials::new(MemoryStore::new());

    assert!(!credentials.is_authenticated());
}

#[test]
fn given_empty_token_when_is_authenticated_then_false() {
    let store = MemoryStore::new();
    store.set(keys::AUTH_TOKEN_KEY, "").unwrap();

    let credentials = StoredCredentials::new(store);

    assert!(!credentials.is_authenticated());
}

#[test]
fn given_token_when_is_authenticated_then_true() {
    let store = MemoryStore::new();
    store.set(keys::AUTH_TOKEN_KEY, "some-token").unwrap();

    let credentials = StoredCredentials::new(store);

    assert!(credentials.is_authenticated());
}

#[test]
fn given_valid_records_when_looked_up_then_decoded() {
    let store = MemoryStore::new();
    store.set(keys::USER_KEY, r#"{"id":"u1","created_at":"2024-01-01T00:00:00Z"}"#)
        .unwrap();
    store.set(keys::TENANT_KEY, r#"{"id":"t1","name":"Acme"}"#).unwrap();

    let credentials = StoredCredentials::new(store);

    assert_eq!(credentials.stored_user().unwrap().id, "u1");
    let tenant = credentials.stored_tenant().unwrap();
    assert_eq!(tenant.id, "t1");
    assert_eq!(tenant.name.as_deref(), Some("Acme"));
}

#[test]
fn given_missing_records_when_looked_up_then_absent() {
    let credentials = StoredCredentials::new(MemoryStore::new());

    assert!(credentials.stored_user().is_none());
    assert!(credentials.stored_tenant().is_none());
}

#[test]
fn given_corrupted_record_when_looked_up_then_absent() {
    let store = MemoryStore::new();
    store.set(keys::USER_KEY, "not json {{{").unwrap();
    store.set(keys::TENANT_KEY, r#"{"missing":"id"}"#).unwrap();

    let credentials = StoredCredentials::new(store);

    assert!(credentials.stored_user().is_none());
    assert!(credentials.stored_tenant().is_none());
}
