//! Process-wide session store.
//!
//! The access credential lives in memory only and is never written to
//! disk or any other durable storage.

use std::fmt;

use tokio::sync::RwLock;

use partnerhub_core::AppError;

use crate::account::{AccountStatus, AuthAccount, PartnerRole};
use crate::jwt::AccessClaims;

/// Snapshot of the current session.
#[derive(Clone, Default)]
pub struct Session {
    /// Current access credential, if authenticated.
    pub access_credential: Option<String>,
    /// Numeric account identifier from the credential claims.
    pub subject_id: Option<i64>,
    /// Partner role from the credential claims.
    pub role: Option<PartnerRole>,
    /// Account status from the credential claims.
    pub status: Option<AccountStatus>,
    /// Whether the first silent-renewal attempt has completed.
    pub initialized: bool,
}

impl Session {
    /// The account snapshot, if the session is fully populated.
    pub fn account(&self) -> Option<AuthAccount> {
        Some(AuthAccount {
            subject_id: self.subject_id?,
            role: self.role?,
            status: self.status?,
        })
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_credential", &self.access_credential.as_deref().map(|_| "<redacted>"))
            .field("subject_id", &self.subject_id)
            .field("role", &self.role)
            .field("status", &self.status)
            .field("initialized", &self.initialized)
            .finish()
    }
}

/// Shared, mutable session state for one client instance.
///
/// Constructed once at application startup and handed to the session
/// client and any UI consumers by `Arc`.
#[derive(Debug, Default)]
pub struct SessionStore {
    state: RwLock<Session>,
}

impl SessionStore {
    /// Create an empty, uninitialized store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A full copy of the current session state.
    pub async fn snapshot(&self) -> Session {
        self.state.read().await.clone()
    }

    /// The current access credential, if any.
    pub async fn access_credential(&self) -> Option<String> {
        self.state.read().await.access_credential.clone()
    }

    /// The current partner role, if any.
    pub async fn role(&self) -> Option<PartnerRole> {
        self.state.read().await.role
    }

    /// Whether a credential is currently held.
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.access_credential.is_some()
    }

    /// Whether the first renewal attempt has completed.
    pub async fn is_initialized(&self) -> bool {
        self.state.read().await.initialized
    }

    /// Populate the session from a fresh credential and its decoded claims.
    pub async fn set_session(&self, credential: &str, claims: &AccessClaims) -> Result<(), AppError> {
        let subject_id = claims.subject_id()?;
        let mut state = self.state.write().await;
        state.access_credential = Some(credential.to_owned());
        state.subject_id = Some(subject_id);
        state.role = Some(claims.role);
        state.status = Some(claims.status);
        Ok(())
    }

    /// Drop the credential and account fields.
    ///
    /// `initialized` is left untouched: it records that the first renewal
    /// attempt completed, which remains true after logout.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.access_credential = None;
        state.subject_id = None;
        state.role = None;
        state.status = None;
    }

    /// Record that the first renewal attempt has completed.
    pub async fn mark_initialized(&self) {
        self.state.write().await.initialized = true;
    }
}
