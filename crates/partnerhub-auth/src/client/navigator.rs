//! Seam for the forced-navigation side effect.

use tracing::warn;

/// Receives the "send the user back to login" signal.
///
/// In the browser original this is a hard location change; an embedding
/// application injects its own implementation (route change, window event,
/// process exit). Invoked exactly once per unrecoverable renewal failure
/// and once per explicit logout.
pub trait Navigator: Send + Sync {
    /// Navigate the user to the login entry point.
    fn redirect_to_login(&self);
}

/// Default navigator that only records the event.
///
/// Suitable for headless consumers (CLI, tests) where there is nothing to
/// navigate; the caller sees the session error and reacts itself.
#[derive(Debug, Clone)]
pub struct LoggingNavigator {
    login_entry_path: String,
}

impl LoggingNavigator {
    /// Create a navigator that logs redirects to the given entry path.
    pub fn new(login_entry_path: impl Into<String>) -> Self {
        Self {
            login_entry_path: login_entry_path.into(),
        }
    }
}

impl Navigator for LoggingNavigator {
    fn redirect_to_login(&self) {
        warn!(target = %self.login_entry_path, "Session ended, user must re-authenticate");
    }
}
