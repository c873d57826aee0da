use crate::credential_source::CredentialSource;
use crate::error::Result;

use sc_core::{SessionState, StoredUser, Tenant};
use sc_storage::{KeyValueStore, keys};

use log::{debug, info};

type WatchFn = Box<dyn FnMut(&SessionState) + Send>;

/// Mediates between persisted credentials and in-memory session state.
///
/// One accessor instance owns one [`SessionState`]. The state is populated
/// by a single `initialize` pass and lives only as long as the instance;
/// only the tenant is ever written back, through [`update_tenant`].
///
/// [`update_tenant`]: SessionAccessor::update_tenant
pub struct SessionAccessor<C: CredentialSource, S: KeyValueStore> {
    credentials: C,
    store: S,
    state: SessionState,
    watchers: Vec<WatchFn>,
}

impl<C, S> SessionAccessor<C, S>
where
    C: CredentialSource,
    S: KeyValueStore,
{
    pub fn new(credentials: C, store: S) -> Self {
        Self {
            credentials,
            store,
            state: SessionState::new(),
            watchers: Vec::new(),
        }
    }

    /// Runs the one-time check-and-load pass.
    ///
    /// If the credential source reports authenticated, the cached user and
    /// tenant are adopted; either may be absent. The loading flag settles
    /// regardless of the outcome, and observers see the load and the flag
    /// flip as a single notification. Calling again after the state has
    /// settled is a no-op: the phase machine has no transition back.
    pub fn initialize(&mut self) {
        if !self.state.is_loading() {
            debug!("Session already settled, ignoring repeat initialization");
            return;
        }

        if self.credentials.is_authenticated() {
            self.state.user = self.credentials.stored_user();
            self.state.tenant = self.credentials.stored_tenant();
            info!(
                "Session initialized: user={:?} tenant={:?}",
                self.state.user.as_ref().map(|u| u.id.as_str()),
                self.state.tenant.as_ref().map(|t| t.id.as_str()),
            );
        } else {
            info!("Session initialized: not authenticated");
        }

        self.state.settle();
        self.notify();
    }

    /// Replaces the active tenant in memory, then persists it.
    ///
    /// The in-memory value is replaced before the write, so a failed write
    /// leaves memory ahead of storage; the error propagates to the caller
    /// with no retry and no rollback. The tenant is stored as-is, with no
    /// validation.
    pub fn update_tenant(&mut self, tenant: Tenant) -> Result<()> {
        let json = serde_json::to_string(&tenant)?;
        let tenant_id = tenant.id.clone();

        self.state.tenant = Some(tenant);
        self.store.set(keys::TENANT_KEY, &json)?;

        info!("Tenant updated: {tenant_id}");
        self.notify();
        Ok(())
    }

    /// Whether credentials are present right now.
    ///
    /// Re-derived from the credential source on every call, never cached.
    /// It can therefore disagree with [`user`]/[`tenant`], which reflect
    /// "authenticated as of the last initialization".
    ///
    /// [`user`]: SessionAccessor::user
    /// [`tenant`]: SessionAccessor::tenant
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_authenticated()
    }

    pub fn user(&self) -> Option<&StoredUser> {
        self.state.user.as_ref()
    }

    pub fn tenant(&self) -> Option<&Tenant> {
        self.state.tenant.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Registers an observer for state changes.
    ///
    /// Observers run synchronously after `initialize` settles and after
    /// each successful `update_tenant`.
    pub fn subscribe<F>(&mut self, watcher: F)
    where
        F: FnMut(&SessionState) + Send + 'static,
    {
        self.watchers.push(Box::new(watcher));
    }

    fn notify(&mut self) {
        for watcher in &mut self.watchers {
            watcher(&self.state);
        }
    }
}
