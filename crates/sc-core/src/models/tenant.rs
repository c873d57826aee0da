use serde::{Deserialize, Serialize};

/// Active organizational context for a session.
///
/// Treated as opaque: no validation happens here, and the record is stored
/// and loaded as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub name: Option<String>,
}

impl Tenant {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }
}
