mod credentials;

use crate::CredentialSource;

use std::path::PathBuf;

use sc_core::{StoredUser, Tenant};
use sc_storage::{KeyValueStore, StorageError};

/// Credential source with canned answers.
pub(crate) struct FixedCredentials {
    pub authenticated: bool,
    pub user: Option<StoredUser>,
    pub tenant: Option<Tenant>,
}

impl FixedCredentials {
    pub(crate) fn unauthenticated() -> Self {
        Self {
            authenticated: false,
            user: None,
            tenant: None,
        }
    }

    pub(crate) fn authenticated(user: Option<StoredUser>, tenant: Option<Tenant>) -> Self {
        Self {
            authenticated: true,
            user,
            tenant,
        }
    }
}

impl CredentialSource for FixedCredentials {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn stored_user(&self) -> Option<StoredUser> {
        self.user.clone()
    }

    fn stored_tenant(&self) -> Option<Tenant> {
        self.tenant.clone()
    }
}

/// Store whose writes always fail, as if the volume were full.
pub(crate) struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> sc_storage::Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> sc_storage::Result<()> {
        Err(StorageError::file_write(
            PathBuf::from("/dev/full"),
            std::io::Error::other("quota exceeded"),
        ))
    }
}

pub(crate) fn user(id: &str) -> StoredUser {
    StoredUser::new(id, None, None)
}
