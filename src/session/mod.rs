//! Session flag persistence.
//!
//! The logged-in flag and the account role survive restarts through a small
//! key/value [`SessionStore`]. The store is always passed in explicitly; the
//! rest of the application never reaches for a global.

pub mod store;

use crate::auth::Role;
use tracing::{debug, info};

pub use store::{FileStore, MemoryStore, SessionKey, SessionStore, StoreError};

/// Snapshot of the persisted session flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
    pub role: Option<Role>,
}

impl Session {
    /// Read both flags from the store. Unknown role strings read as `None`.
    pub fn load(store: &dyn SessionStore) -> Self {
        let logged_in = store
            .get(SessionKey::IsLoggedIn)
            .is_some_and(|v| v == "true");
        let role = store
            .get(SessionKey::UserType)
            .and_then(|v| v.parse::<Role>().ok());
        debug!(logged_in, ?role, "loaded session flags");
        Self { logged_in, role }
    }

    /// Role to render the dashboard for. Falls back to advertiser when the
    /// store holds no usable role.
    pub fn dashboard_role(&self) -> Role {
        self.role.unwrap_or(Role::Advertiser)
    }

    /// Record a completed sign-in or sign-up.
    pub fn persist_login(store: &mut dyn SessionStore, role: Role) -> Result<(), StoreError> {
        store.set(SessionKey::IsLoggedIn, "true")?;
        store.set(SessionKey::UserType, role.as_str())?;
        info!(role = role.as_str(), "session persisted");
        Ok(())
    }

    /// Forget the session entirely.
    pub fn logout(store: &mut dyn SessionStore) -> Result<(), StoreError> {
        store.clear(SessionKey::IsLoggedIn)?;
        store.clear(SessionKey::UserType)?;
        info!("session cleared");
        Ok(())
    }
}
