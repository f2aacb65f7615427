//! Persisted login flag.
//!
//! The flag is a single string under [`SESSION_KEY`]. What counts as
//! "logged in" is decided by a [`SessionPolicy`], so a real token format
//! can replace the presence check without touching callers.

mod file_store;
mod memory;

pub use file_store::FileSessionStore;
pub use memory::MemorySessionStore;

use async_trait::async_trait;
use thiserror::Error;

/// Storage key of the session flag.
pub const SESSION_KEY: &str = "StoredSessionId";

/// Value written on logout.
pub const LOGGED_OUT: &str = "0";

/// Errors that can occur while reading or writing the session flag.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to access session storage '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Session storage '{path}' is corrupt: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value storage of the session flag.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Current flag, or `None` when nothing was ever stored.
    async fn read(&self) -> Result<Option<String>, SessionError>;

    /// Overwrite the flag.
    async fn write(&self, token: &str) -> Result<(), SessionError>;
}

/// Decides whether a stored flag means "logged in".
pub trait SessionPolicy: Send + Sync {
    fn is_authenticated(&self, token: Option<&str>) -> bool;
}

/// A stored value counts as logged in unless it is blank or numerically
/// zero, so `"0"`, `"00"`, `" 0 "` and `"0.0"` all read as [`LOGGED_OUT`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PresencePolicy;

impl SessionPolicy for PresencePolicy {
    fn is_authenticated(&self, token: Option<&str>) -> bool {
        let Some(token) = token.map(str::trim) else {
            return false;
        };
        if token.is_empty() {
            return false;
        }
        !matches!(token.parse::<f64>(), Ok(value) if value == 0.0)
    }
}

/// Resolved login state as the account screen sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// Flag not read yet.
    #[default]
    Unknown,
    LoggedIn,
    LoggedOut,
}

impl SessionStatus {
    pub fn resolve(policy: &dyn SessionPolicy, token: Option<&str>) -> Self {
        if policy.is_authenticated(token) {
            Self::LoggedIn
        } else {
            Self::LoggedOut
        }
    }

    /// Label of the login/logout menu row: the action available next.
    pub fn action_label(&self) -> &'static str {
        match self {
            Self::LoggedIn => "Logout",
            Self::Unknown | Self::LoggedOut => "Login",
        }
    }
}
