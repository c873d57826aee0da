pub mod credential_source;
pub mod error;
pub mod session_accessor;
pub mod stored_credentials;

pub use credential_source::CredentialSource;
pub use error::{Result, SessionError};
pub use session_accessor::SessionAccessor;
pub use stored_credentials::StoredCredentials;

#[cfg(test)]
mod tests;
