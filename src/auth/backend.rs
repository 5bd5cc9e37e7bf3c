use super::error::AuthError;
use super::Role;
use crate::config::AuthConfig;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

/// Sign-in form payload.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Sign-up payload, only constructible once a role has been chosen.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Account service. Both calls resolve to the role the session should be
/// opened with.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn sign_in(&self, credentials: Credentials) -> Result<Role, AuthError>;
    async fn sign_up(&self, registration: Registration) -> Result<Role, AuthError>;
}

/// Stand-in account service: waits a fixed delay, then accepts everything.
/// In offline mode every call fails instead.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
    sign_in_role: Role,
    offline: bool,
}

impl SimulatedBackend {
    pub fn new(delay: Duration, sign_in_role: Role) -> Self {
        Self {
            delay,
            sign_in_role,
            offline: false,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            Duration::from_millis(config.submit_delay_ms),
            config.sign_in_role,
        )
        .offline(config.offline)
    }

    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    async fn respond(&self) -> Result<(), AuthError> {
        tokio::time::sleep(self.delay).await;
        if self.offline {
            warn!("simulated account service is offline");
            return Err(AuthError::Unavailable("offline mode".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthBackend for SimulatedBackend {
    async fn sign_in(&self, credentials: Credentials) -> Result<Role, AuthError> {
        self.respond().await?;
        info!(email = %credentials.email, role = %self.sign_in_role, "simulated sign-in accepted");
        Ok(self.sign_in_role)
    }

    async fn sign_up(&self, registration: Registration) -> Result<Role, AuthError> {
        self.respond().await?;
        info!(email = %registration.email, role = %registration.role, "simulated sign-up accepted");
        Ok(registration.role)
    }
}
