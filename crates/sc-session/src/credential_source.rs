use sc_core::{StoredUser, Tenant};

/// Read-side collaborators consulted during session initialization.
///
/// All three are side-effect free and re-derivable from ambient storage at
/// any time. Absence means "no data", never an error.
pub trait CredentialSource {
    /// Whether credentials are present right now.
    ///
    /// Recomputed on every call, so it can disagree with records loaded at
    /// initialization time if credentials changed in between.
    fn is_authenticated(&self) -> bool;

    fn stored_user(&self) -> Option<StoredUser>;

    fn stored_tenant(&self) -> Option<Tenant>;
}
