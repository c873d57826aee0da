use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cached record for the authenticated principal.
///
/// Attributes are produced by whoever wrote the record; this crate carries
/// them verbatim between storage and memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl StoredUser {
    pub fn new<S: Into<String>>(id: S, name: Option<String>, email: Option<String>) -> Self {
        Self {
            id: id.into(),
            name,
            email,
            created_at: Utc::now(),
        }
    }
}
