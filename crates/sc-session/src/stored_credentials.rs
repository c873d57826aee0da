use crate::credential_source::CredentialSource;

use sc_core::{StoredUser, Tenant};
use sc_storage::{KeyValueStore, keys};

use log::warn;
use serde::de::DeserializeOwned;

/// Credential source backed by a key-value store.
///
/// Authentication is presence of a non-empty auth token. Unreadable or
/// corrupted records are treated as absent, with a warning, rather than
/// surfaced as errors.
pub struct StoredCredentials<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StoredCredentials<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn decode<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(value) => value?,
            Err(e) => {
                warn!("Failed to read '{key}': {e}");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Stored value under '{key}' is corrupted: {e}");
                None
            }
        }
    }
}

impl<S: KeyValueStore> CredentialSource for StoredCredentials<S> {
    fn is_authenticated(&self) -> bool {
        match self.store.get(keys::AUTH_TOKEN_KEY) {
            Ok(Some(token)) => !token.is_empty(),
            Ok(None) => false,
            Err(e) => {
                warn!("Failed to read '{}': {e}", keys::AUTH_TOKEN_KEY);
                false
            }
        }
    }

    fn stored_user(&self) -> Option<StoredUser> {
        self.decode(keys::USER_KEY)
    }

    fn stored_tenant(&self) -> Option<Tenant> {
        self.decode(keys::TENANT_KEY)
    }
}
