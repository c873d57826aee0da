use std::panic::Location;

use error_location::ErrorLocation;
use sc_storage::StorageError;
use thiserror::Error;

/// Errors surfaced at the session accessor boundary.
///
/// The only operation that can fail is the persistence write inside
/// `update_tenant`; lookups model failure as absence instead.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to persist tenant: {source}")]
    Storage {
        #[from]
        source: StorageError,
    },

    #[error("Failed to serialize tenant: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl From<serde_json::Error> for SessionError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
